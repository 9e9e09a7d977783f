/// Preview: interactive synthesis shell for trying prompts against a bank.
///
/// Usage: preview [--bank <path>] [--instant]
///
/// Commands:
///   text <prompt>      synthesize a text response
///   visual <prompt>    synthesize a shape pattern
///   history            list completed syntheses
///   latency [mode]     show or set pacing (realistic | instant)
///   triggers           list the bank's trigger phrases
///   help               list commands
///   quit               exit

use mirage_engine::core::bank::TemplateBank;
use mirage_engine::core::latency::Latency;
use mirage_engine::core::session::SynthesisSession;
use mirage_engine::schema::block::DisplayBlock;
use mirage_engine::schema::response::GeneratedResponse;
use std::io::{self, BufRead, Write};
use std::path::Path;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 400.0;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let mut bank_path = None;
    let mut latency = Latency::realistic();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bank" if i + 1 < args.len() => {
                i += 1;
                bank_path = Some(args[i].clone());
            }
            "--instant" => {
                latency = Latency::none();
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let bank = match bank_path {
        Some(ref path) => match TemplateBank::load_from_ron(Path::new(path)) {
            Ok(bank) => {
                println!("Loaded bank: {}", path);
                bank
            }
            Err(e) => {
                eprintln!("ERROR loading bank {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => match mirage_engine::demo_banks::classic_demo() {
            Ok(bank) => bank,
            Err(e) => {
                eprintln!("ERROR parsing built-in bank: {}", e);
                std::process::exit(1);
            }
        },
    };

    let mut session = match SynthesisSession::builder()
        .with_bank(bank.clone())
        .latency(latency)
        .build()
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("ERROR building session: {}", e);
            std::process::exit(1);
        }
    };

    println!("Bank has {} templates plus a fallback.", bank.entries.len());
    println!("Latency: {}", latency_label(latency));
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("mirage> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "text" => {
                if rest.is_empty() {
                    println!("Usage: text <prompt>");
                    continue;
                }
                match session.synthesize_text(rest).await {
                    Some(response) => {
                        println!("\n--- Generated Text ---");
                        for block in &response.blocks {
                            print_block(block);
                        }
                        println!("--- End ---\n");
                    }
                    None => println!("Prompt is empty after trimming; nothing generated."),
                }
            }
            "visual" => {
                if rest.is_empty() {
                    println!("Usage: visual <prompt>");
                    continue;
                }
                match session
                    .synthesize_visual(rest, CANVAS_WIDTH, CANVAS_HEIGHT)
                    .await
                {
                    Some(shapes) => {
                        println!(
                            "\n--- Generated Pattern ({}x{}) ---",
                            CANVAS_WIDTH, CANVAS_HEIGHT
                        );
                        println!("{}", mirage_engine::core::pattern::caption(rest));
                        for shape in shapes.iter().take(5) {
                            println!(
                                "  circle at ({:7.2}, {:7.2}) r={:5.2} {}",
                                shape.x,
                                shape.y,
                                shape.radius,
                                shape.css_color()
                            );
                        }
                        println!("  ... and {} more shapes", shapes.len() - 5);
                        println!("--- End ---\n");
                    }
                    None => println!("Prompt is empty after trimming; nothing generated."),
                }
            }
            "history" => {
                if session.history().is_empty() {
                    println!("No syntheses yet.");
                    continue;
                }
                for (index, entry) in session.history().iter().enumerate() {
                    print_history_entry(index, entry);
                }
            }
            "latency" => {
                let requested = match rest {
                    "" => {
                        println!("Latency: {}", latency_label(session.latency()));
                        continue;
                    }
                    "realistic" => Latency::realistic(),
                    "instant" => Latency::none(),
                    other => {
                        println!("Unknown latency mode: '{}'. Use realistic or instant.", other);
                        continue;
                    }
                };
                // Rebuild with the same bank, carrying the log across.
                session = match SynthesisSession::builder()
                    .with_bank(bank.clone())
                    .latency(requested)
                    .with_log(session.into_log())
                    .build()
                {
                    Ok(session) => session,
                    Err(e) => {
                        eprintln!("ERROR rebuilding session: {}", e);
                        std::process::exit(1);
                    }
                };
                println!("Latency set to {}", latency_label(requested));
            }
            "triggers" => {
                for template in &bank.entries {
                    println!("  {}", template.trigger);
                }
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }
}

fn print_usage() {
    println!("Preview: interactive synthesis shell for trying prompts against a bank.");
    println!();
    println!("Usage: preview [--bank <path>] [--instant]");
    println!();
    println!("  --bank <path>  Path to a RON template bank (default: built-in catalogue)");
    println!("  --instant      Disable the simulated latency");
}

fn print_help() {
    println!("Commands:");
    println!("  text <prompt>    Synthesize a text response and log it");
    println!("  visual <prompt>  Synthesize a shape pattern (not logged)");
    println!("  history          List completed syntheses, oldest first");
    println!("  latency [mode]   Show or set pacing: realistic | instant");
    println!("  triggers         List the bank's trigger phrases");
    println!("  help             Show this help");
    println!("  quit             Exit");
}

fn latency_label(latency: Latency) -> &'static str {
    if latency == Latency::none() {
        "instant"
    } else {
        "realistic"
    }
}

fn print_block(block: &DisplayBlock) {
    match block {
        DisplayBlock::Heading(text) => println!("== {} ==", text),
        DisplayBlock::Emphasis(text) => println!("*{}*", text),
        DisplayBlock::Paragraph(text) => println!("{}", text),
    }
}

fn print_history_entry(index: usize, entry: &GeneratedResponse) {
    println!(
        "  [{}] {} \"{}\" ({} blocks)",
        index + 1,
        entry.timestamp.format("%H:%M:%S"),
        entry.prompt,
        entry.blocks.len()
    );
}
