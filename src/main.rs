use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scorecard::config::{self, Config};
use scorecard::decisions::{self, DecisionFilter, DecisionRecord};
use scorecard::export;
use scorecard::output;
use scorecard::registry::{self, Client, Registry};
use scorecard::scoring::{self, Decision, EmploymentStatus, LoanTerms};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a loan application for a registered client
    Assess {
        /// Client id (or unique id prefix)
        client: String,
        /// Loan principal
        #[arg(long)]
        amount: f64,
        /// Term in months
        #[arg(long)]
        term: u32,
        /// Stated purpose (recorded with the decision, not scored)
        #[arg(long, default_value = "")]
        purpose: String,
        /// Score without appending to the decision log
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage the client registry
    #[command(subcommand)]
    Client(ClientCommands),
    /// List past decisions
    Decisions {
        /// Only show one outcome (accept, refer, reject)
        #[arg(long, value_enum)]
        decision: Option<Decision>,
        /// Only show decisions for one client (id or unique prefix)
        #[arg(long)]
        client: Option<String>,
        /// Export the (filtered) listing to a CSV file instead of printing
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
    /// Summarize the decision log
    Stats,
}

#[derive(Subcommand, Debug)]
enum ClientCommands {
    /// Register a new client
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Monthly income
        #[arg(long)]
        income: f64,
        /// Monthly recurring expenses
        #[arg(long)]
        expenses: f64,
        #[arg(long, value_enum)]
        status: EmploymentStatus,
        /// Years in current employment
        #[arg(long, default_value_t = 0.0)]
        tenure: f64,
        /// Age in years
        #[arg(long)]
        age: u32,
    },
    /// List registered clients
    List,
    /// Show one client and their past decisions
    Show {
        /// Client id (or unique id prefix)
        client: String,
    },
    /// Remove a client (past decisions are kept)
    Rm {
        /// Client id (or unique id prefix)
        client: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(about = "Consumer credit application scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/scorecard/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn load_registry_or_exit(config: &Config) -> Registry {
    match registry::load_registry(&config.clients_path()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Storage error: {}", e);
            std::process::exit(EXIT_STORAGE);
        }
    }
}

fn save_registry_or_exit(config: &Config, registry: &Registry) {
    if let Err(e) = registry::save_registry(&config.clients_path(), registry) {
        eprintln!("Storage error: {}", e);
        std::process::exit(EXIT_STORAGE);
    }
}

fn load_log_or_exit(config: &Config) -> decisions::DecisionLog {
    match decisions::load_log(&config.decisions_path()) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Storage error: {}", e);
            std::process::exit(EXIT_STORAGE);
        }
    }
}

fn save_log_or_exit(config: &Config, log: &decisions::DecisionLog) {
    if let Err(e) = decisions::save_log(&config.decisions_path(), log) {
        eprintln!("Storage error: {}", e);
        std::process::exit(EXIT_STORAGE);
    }
}

fn resolve_client_or_exit<'a>(registry: &'a Registry, key: &str) -> &'a Client {
    match registry.resolve(key) {
        Some(client) => client,
        None => {
            eprintln!(
                "No client matches '{}'. Use a full id or a unique prefix (see `scorecard client list`).",
                key
            );
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Data directory: {}", config.resolve_data_dir().display());
    }

    let use_colors = output::should_use_colors();
    let currency = config.currency.as_deref();

    match cli.command {
        Commands::Assess {
            client,
            amount,
            term,
            purpose,
            dry_run,
        } => {
            // User-facing validation happens here; the scorer's own
            // InvalidInput check is the backstop.
            if !(amount > 0.0) {
                eprintln!("Loan amount must be a positive number (got {}).", amount);
                std::process::exit(EXIT_INPUT);
            }
            if term == 0 {
                eprintln!("Loan term must be at least one month.");
                std::process::exit(EXIT_INPUT);
            }

            let registry = load_registry_or_exit(&config);
            let client = resolve_client_or_exit(&registry, &client).clone();

            let loan = LoanTerms {
                principal: amount,
                term_months: term,
            };
            let assessment = match scoring::assess(&client.applicant(), &loan) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            // Cannot fail once assess has succeeded on the same loan
            let payment = match scoring::monthly_payment(loan.principal, loan.term_months) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            println!(
                "{}",
                output::format_assessment_detail(
                    &client,
                    &loan,
                    payment,
                    &assessment,
                    currency,
                    use_colors
                )
            );

            if dry_run {
                if cli.verbose {
                    eprintln!("Dry run: decision not recorded");
                }
            } else {
                let mut log = load_log_or_exit(&config);
                log.append(DecisionRecord::from_assessment(
                    &client,
                    &loan,
                    &purpose,
                    &assessment,
                ));
                save_log_or_exit(&config, &log);
                if cli.verbose {
                    eprintln!("Decision recorded ({} total)", log.records().len());
                }
            }
        }

        Commands::Client(cmd) => match cmd {
            ClientCommands::Add {
                first_name,
                last_name,
                income,
                expenses,
                status,
                tenure,
                age,
            } => {
                // Income and expenses are validated independently; expenses
                // above income are allowed and absorbed by the model.
                if income < 0.0 || expenses < 0.0 {
                    eprintln!("Income and expenses must be non-negative.");
                    std::process::exit(EXIT_INPUT);
                }
                if tenure < 0.0 {
                    eprintln!("Tenure must be non-negative.");
                    std::process::exit(EXIT_INPUT);
                }

                let mut registry = load_registry_or_exit(&config);
                let client = Client::new(
                    first_name, last_name, income, expenses, status, tenure, age,
                );
                let id = client.id;
                registry.upsert(client);
                save_registry_or_exit(&config, &registry);
                println!("Registered client {}", output::short_id(&id));
            }
            ClientCommands::List => {
                let registry = load_registry_or_exit(&config);
                println!(
                    "{}",
                    output::format_client_table(&registry.clients, currency, use_colors)
                );
            }
            ClientCommands::Show { client } => {
                let registry = load_registry_or_exit(&config);
                let client = resolve_client_or_exit(&registry, &client);
                println!(
                    "{}",
                    output::format_client_table(
                        std::slice::from_ref(client),
                        currency,
                        use_colors
                    )
                );

                let log = load_log_or_exit(&config);
                let filter = DecisionFilter {
                    decision: None,
                    client_id: Some(client.id),
                };
                let records = filter.apply(log.records());
                if !records.is_empty() {
                    println!();
                    println!(
                        "{}",
                        output::format_decision_table(&records, currency, use_colors)
                    );
                }
            }
            ClientCommands::Rm { client } => {
                let mut registry = load_registry_or_exit(&config);
                let id = resolve_client_or_exit(&registry, &client).id;
                registry.remove(id);
                save_registry_or_exit(&config, &registry);
                println!("Removed client {}", output::short_id(&id));
            }
        },

        Commands::Decisions {
            decision,
            client,
            csv,
        } => {
            let log = load_log_or_exit(&config);

            let client_id = client.map(|key| {
                let registry = load_registry_or_exit(&config);
                resolve_client_or_exit(&registry, &key).id
            });
            let filter = DecisionFilter {
                decision,
                client_id,
            };
            let records = filter.apply(log.records());

            if let Some(path) = csv {
                if let Err(e) = export::export_csv(&records, &path) {
                    eprintln!("Export error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
                println!("Exported {} decisions to {}", records.len(), path.display());
            } else {
                println!(
                    "{}",
                    output::format_decision_table(&records, currency, use_colors)
                );
            }
        }

        Commands::Stats => {
            let registry = load_registry_or_exit(&config);
            let log = load_log_or_exit(&config);
            let summary = decisions::summarize(log.records());
            println!(
                "{}",
                output::format_summary(&summary, registry.clients.len(), currency)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
