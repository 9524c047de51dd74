use rotbreak::cli::parse_cli_args;
use rotbreak::cli_pretty_printing::{case_summary, comparison_table, input_is_empty, result_block};
use rotbreak::error::RotbreakError;
use rotbreak::{generator, perform_cracking, CrackerKind};

fn main() -> Result<(), RotbreakError> {
    // Turn CLI arguments into the input phrase and the chosen strategy
    let (text, algorithm) = parse_cli_args()?;
    if text.trim().is_empty() {
        println!("{}", input_is_empty());
        return Ok(());
    }

    let case = generator::generate(&text);
    println!("{}\n", case_summary(&case));

    match algorithm {
        Some(kind) => {
            let (result, measurement) =
                perform_cracking(kind, &case.ciphertext, &case.dictionary);
            println!("{}", result_block(&result, &measurement));
        }
        None => {
            // No strategy chosen: run all four and line their numbers up.
            let mut rows = Vec::new();
            for kind in CrackerKind::ALL {
                let (result, measurement) =
                    perform_cracking(kind, &case.ciphertext, &case.dictionary);
                println!("{}\n", result_block(&result, &measurement));
                rows.push((result.cracker_used, measurement));
            }
            println!("{}", comparison_table(&rows));
        }
    }
    Ok(())
}
