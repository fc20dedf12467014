use kadence_css::{render_content, BlockError, MemoryStore, RenderConfig, RenderOutput};
use log::info;
use std::env;
use std::fs;
use std::process;

struct Options {
    config: RenderConfig,
    store: MemoryStore,
    files: Vec<String>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("✗ {}", e);
            process::exit(1);
        }
    };

    let mut exit_code = 0;
    for file_path in &options.files {
        match render_file(file_path, &options) {
            Ok(out) => {
                info!(
                    "{}: {} blocks, {} font families, scripts: [{}]",
                    file_path,
                    out.blocks_visited,
                    out.fonts.len(),
                    out.scripts.join(", ")
                );
                println!("{}", out.head_html(&options.config));
            }
            Err(e) => {
                eprintln!("✗ {} could not be rendered:", file_path);
                eprintln!("    {}", e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: kadence-css [--config config.yaml] [--store blocks.yaml] <post>...");
    eprintln!();
    eprintln!("Posts are block markup or a JSON parse tree.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  kadence-css page.html");
    eprintln!("  kadence-css --store reusable.yaml page.html about.json");
}

fn parse_args(args: &[String]) -> Result<Options, BlockError> {
    let mut options = Options {
        config: RenderConfig::default(),
        store: MemoryStore::new(),
        files: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = flag_value(&mut iter, "--config")?;
                options.config = RenderConfig::from_yaml(&read(path)?)?;
            }
            "--store" => {
                let path = flag_value(&mut iter, "--store")?;
                options.store = MemoryStore::from_yaml(&read(path)?)?;
                info!("loaded {} stored posts from {}", options.store.len(), path);
            }
            _ => options.files.push(arg.clone()),
        }
    }

    if options.files.is_empty() {
        return Err(BlockError::InvalidConfig {
            field: "posts".to_string(),
            reason: "no post files given".to_string(),
        });
    }
    Ok(options)
}

fn flag_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, BlockError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| BlockError::InvalidConfig {
            field: flag.to_string(),
            reason: "expects a file path".to_string(),
        })
}

fn read(path: &str) -> Result<String, BlockError> {
    fs::read_to_string(path).map_err(|e| BlockError::Io(format!("{}: {}", path, e)))
}

fn render_file(path: &str, options: &Options) -> Result<RenderOutput, BlockError> {
    let content = read(path)?;
    Ok(render_content(&content, &options.config, &options.store))
}
