use crate::cli::InitArgs;
use crate::init::{self, InitOutcome, WriteMode};

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    let mode = if args.force {
        WriteMode::Force
    } else if args.append {
        WriteMode::Append
    } else {
        WriteMode::Skip
    };

    let results = init::run(&args.dir, args.agent, mode);

    let mut failures = Vec::new();
    for result in &results {
        let file = result.file.display();
        match &result.outcome {
            Ok(InitOutcome::Created) => println!("created: {}", file),
            Ok(InitOutcome::Overwritten) => println!("overwritten: {}", file),
            Ok(InitOutcome::Appended) => println!("appended: {}", file),
            Ok(InitOutcome::Skipped) => println!(
                "skipped: {} (already exists, use --force to overwrite or --append to extend)",
                file
            ),
            Err(e) => failures.push(e.to_string()),
        }
    }

    // reported once by main as a single diagnostic line
    if !failures.is_empty() {
        anyhow::bail!("{}", failures.join("; "));
    }
    Ok(())
}
