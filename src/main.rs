use clap::Parser;
use gifpress::batch::{self, BatchOutcome, CancelFlag};
use gifpress::budget::SizeBudget;
use gifpress::engine::Gifsicle;
use gifpress::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gifpress")]
#[command(about = "Batch-compress animated GIFs to a target size")]
#[command(long_about = "\
Batch-compress animated GIFs to a target size

Every .gif directly inside FOLDER is compressed through gifsicle: the
animation is exploded into frames, every second frame is dropped, and the
rest are re-merged with a shared 256-color palette and lossy re-encoding.

Outputs are written beside the originals:

  clip.gif  →  clip_compressed.gif

Originals are never modified. Files whose name already contains
'_compressed' are treated as prior outputs and skipped, so re-running over
the same folder is safe.

Each file is reported as ok (within the target), over budget (compressed
but still larger than the target), or failed.")]
#[command(version)]
struct Cli {
    /// Folder containing the GIFs to compress
    folder: PathBuf,

    /// Target size per file, e.g. 500kb, 2mb
    #[arg(long, default_value = "500kb")]
    target: String,

    /// Print the final report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Preflight: fail fast with install instructions rather than on the
    // first file.
    let engine = match Gifsicle::locate() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let budget = SizeBudget::parse(&cli.target);
    if !cli.json {
        println!("Target: {budget} per file");
    }

    let cancel = CancelFlag::new();
    let outcome = if cli.json {
        batch::run_batch(&engine, &cli.folder, budget, &cancel, None)
    } else {
        // Progress lines stream from a printer thread while the batch runs;
        // the sender drops when run_batch returns, ending the loop.
        let (tx, rx) = std::sync::mpsc::channel();
        let printer = std::thread::spawn(move || {
            for event in rx {
                for line in output::format_event(&event) {
                    println!("{}", line);
                }
            }
        });
        let outcome = batch::run_batch(&engine, &cli.folder, budget, &cancel, Some(tx));
        printer.join().unwrap();
        outcome
    };

    match outcome? {
        BatchOutcome::NoMatchingFiles => {
            println!("{}", output::format_no_matches(&cli.folder));
        }
        BatchOutcome::Report(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!();
                output::print_report(&report);
            }
        }
    }

    Ok(())
}
