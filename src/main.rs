use clap::{Parser, Subcommand};
use nestegg::api::{PlanArgs, SimulationArgs, run_http_server, run_plan_command, run_simulate_command};

#[derive(Parser, Debug)]
#[command(name = "nestegg", about = "Retirement corpus planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API.
    Serve {
        #[arg(default_value_t = 8080)]
        port: u16,
    },
    /// Print the corpus plan and year-by-year table.
    Plan(PlanArgs),
    /// Run the bucket simulation and print JSON.
    Simulate {
        #[command(flatten)]
        plan: PlanArgs,
        #[command(flatten)]
        simulation: SimulationArgs,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Serve { port } => run_http_server(port)
            .await
            .map(|()| String::new())
            .map_err(|e| format!("Server error: {e}")),
        Command::Plan(args) => run_plan_command(&args),
        Command::Simulate { plan, simulation } => run_simulate_command(&plan, &simulation),
    };

    match result {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
