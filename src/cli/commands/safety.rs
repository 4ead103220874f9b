use anyhow::Result;

use crate::cli::args::SafetyCheckArgs;
use crate::safety::SafetyNotice;
use crate::AppState;

pub fn print_notice(notice: &SafetyNotice) {
    println!("⚠ {}", notice.message);
    for helpline in &notice.helplines {
        println!("  {} — {}", helpline.label, helpline.contact);
    }
    println!("{}", notice.footer);
}

pub fn run(state: &AppState, args: SafetyCheckArgs) -> Result<()> {
    let result = state.detector.check(&args.message);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.flagged {
        print_notice(&SafetyNotice::standard());
    } else {
        println!("No crisis language detected.");
    }
    Ok(())
}
