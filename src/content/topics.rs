use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    Stress,
    Anxiety,
    Burnout,
    #[value(name = "self-care")]
    SelfCare,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Stress, Topic::Anxiety, Topic::Burnout, Topic::SelfCare];

    pub fn title(&self) -> &'static str {
        match self {
            Topic::Stress => "Stress",
            Topic::Anxiety => "Anxiety",
            Topic::Burnout => "Burnout",
            Topic::SelfCare => "Self-care",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Topic::Stress => "Stress is your body's response to challenges. Short breathing breaks, journaling, and talking to someone can help.",
            Topic::Anxiety => "Anxiety is worry or nervousness that can feel overwhelming. Grounding exercises (5-4-3-2-1) and small routines help.",
            Topic::Burnout => "Burnout is prolonged exhaustion from overwork. Rest, boundaries, and small enjoyable activities are important recoveries.",
            Topic::SelfCare => "Self-care are simple actions to maintain your well-being: sleep, hydration, breaks, friends, hobbies. Small steps matter.",
        }
    }
}

pub const LEARN_MORE: &str =
    "Want more? Try journaling, talking to a friend, or doing a small breathing exercise.";
