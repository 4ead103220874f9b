use anyhow::Result;

use crate::cli::args::LearnArgs;
use crate::content::{random_tip, Topic, LEARN_MORE};

pub fn run(args: LearnArgs) -> Result<()> {
    match args.topic {
        Some(topic) => {
            println!("📘 {}\n", topic.title());
            println!("{}\n", topic.summary());
            println!("{LEARN_MORE}");
        }
        None => {
            println!("📘 Learn — short, friendly explanations about common topics.\n");
            for topic in Topic::ALL {
                println!("{}: {}", topic.title(), topic.summary());
            }
        }
    }
    Ok(())
}

pub fn tip() -> Result<()> {
    let mut rng = rand::thread_rng();
    println!("Daily tip: {}", random_tip(&mut rng));
    Ok(())
}
