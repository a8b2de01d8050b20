use clap::Parser;
use std::fs;
use tailforge_lib::generate;

const TAILFORGE_INTRO: &str = r#"
     ______      _ ______
    /_  __/___ _(_) / ___/__  _______ ____
     / / / __ `/ / / /_  / _ \/ ___/ __ `/ _ \
    / / / /_/ / / / __/ /  __/ /  / /_/ /  __/
   /_/  \__,_/_/_/_/    \___/_/   \__, /\___/
                                 /____/

   Welcome to TailForge - CSS in, component scaffolds out!
"#;

#[derive(Parser)]
#[command(name = "TailForge")]
#[command(about = "Convert raw CSS into Tailwind-ready component scaffolds")]
struct Args {
    /// Input CSS file name.
    input: String,

    /// Optional output file; defaults to stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Emit the full descriptor as JSON instead of component code.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    println!("{}", TAILFORGE_INTRO);

    let args: Args = Args::parse();

    let css = match fs::read_to_string(&args.input) {
        Ok(css) => css,
        Err(e) => {
            eprintln!("Error reading CSS file: {}", e);
            std::process::exit(1);
        }
    };

    let descriptor = match generate::process_stylesheet(&css) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "generated component '{}' from {} declarations",
        descriptor.name,
        descriptor.stats.declaration_count
    );

    let rendered = if args.json {
        serde_json::to_string_pretty(&descriptor).expect("descriptor serializes to JSON")
    } else {
        descriptor.component_code.clone()
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, rendered) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            println!("Wrote {} component to {}", descriptor.name, path);
        }
        None => println!("{}", rendered),
    }
}
