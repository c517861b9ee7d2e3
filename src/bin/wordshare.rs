use clap::{crate_version, Parser, Subcommand};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wordshare::codec::ByteWordCodec;
use wordshare::config::WordshareConfig;
use wordshare::constants::DEFAULT_CONFIG_FILE;
use wordshare::dictionary::Dictionary;
use wordshare::format::parse;
use wordshare::workflow::{CreateOptions, RevealOptions, ShareWorkflow};

#[derive(Debug, Subcommand)]
enum CliArgument {
    /// Create new Shamir's Secret Sharing shares.
    Create {
        /// Minimum shares that are needed.
        #[clap(long)]
        min: Option<usize>,

        /// Amount of shares to generate.
        #[clap(long)]
        amount: Option<usize>,

        /// The word list file. Should have at least 256 words in it, separated by a newline.
        /// (Currently only the first 256 ones are used.)
        #[clap(long)]
        dictionary: Option<PathBuf>,

        /// Filename of the file containing the shares.
        #[clap(long, short)]
        file: Option<PathBuf>,

        /// Overwrite file with shares.
        #[clap(long)]
        force: bool,

        /// Verbose mode displays the raw shares
        #[clap(long, short)]
        verbose: bool,

        /// The secret string to hide.
        secret: String,
    },
    /// Reveal secret from shares.
    Reveal {
        /// The word list file. Make sure this is the same word list used when the shares were
        /// created. (Currently only the first 256 ones are used.)
        #[clap(long)]
        dictionary: Option<PathBuf>,

        /// Filename of the file containing the shares.
        #[clap(long, short)]
        file: Option<PathBuf>,
    },
    /// Print the effective configuration.
    Config,
}

#[derive(Parser, Debug)]
#[command(name = "wordshare")]
#[command(version = crate_version!())]
#[command(
    about = "A command-line Shamir's Secret Sharing application.",
    long_about = "A command-line Shamir's Secret Sharing application. This will generate a text file with word groups. The rows between a '# Share' comment and the next blank line form one share. Keep these rows together when splitting shares up!"
)]
struct Opt {
    /// Configuration file with defaults for the subcommands.
    #[clap(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Subcommand to run.
    #[clap(subcommand)]
    argument: CliArgument,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let opt = Opt::parse();
    let config = WordshareConfig::load(&opt.config)?;
    let workflow = ShareWorkflow::new();

    match opt.argument {
        CliArgument::Create {
            min,
            amount,
            dictionary,
            file,
            force,
            verbose,
            secret,
        } => {
            let options = CreateOptions {
                threshold: min.unwrap_or(config.threshold),
                total: amount.unwrap_or(config.total),
                secret,
                dictionary: dictionary.unwrap_or(config.dictionary),
                destination: file.unwrap_or(config.shares_file),
                allow_overwrite: force || config.force,
            };
            debug!(
                "Creating {} shares, {} needed",
                options.total, options.threshold
            );

            let mut stdout = io::stdout();
            workflow.create_with_echo(&options, &mut stdout)?;

            if verbose {
                println!("\n🐛 shares: ");
                let text = std::fs::read_to_string(&options.destination)?;
                let dictionary = Dictionary::from_path(&options.dictionary)?;
                let codec = ByteWordCodec::new(&dictionary);
                for token in parse(&text, &codec)? {
                    println!("  {}", hex::encode(token.to_bytes()?));
                }
            }

            println!(
                "\n The file {:?} is now created with above shown information.\n",
                options.destination
            );
        }
        CliArgument::Reveal { dictionary, file } => {
            let options = RevealOptions {
                dictionary: dictionary.unwrap_or(config.dictionary),
                source: file.unwrap_or(config.shares_file),
            };
            let secret = workflow.reveal(&options)?;
            println!("RESULT: {}", secret);
        }
        CliArgument::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
