//! # Medflow CLI Tool
//!
//! Command-line interface driving the healthcare scheduling integration flow
//! against the six backing services (patient, doctor, appointment,
//! notification, billing, analytics).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use medflow_client::logging::init_logging;
use medflow_client::{ClientConfig, CompleteFlow, FlowReport};

#[derive(Parser, Debug)]
#[command(name = "medflow-cli")]
#[command(about = "Drive the healthcare scheduling integration flow end to end")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file path (default: ./medflow-client.toml, ~/.medflow/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the complete integration flow
    Run {
        /// Appointment start time, ISO-8601 (default: configured demo value)
        #[arg(long)]
        start_time: Option<String>,

        /// Appointment notes (default: configured demo value)
        #[arg(long)]
        notes: Option<String>,

        /// Skip the settle pauses before polling async side effects
        #[arg(long)]
        no_delays: bool,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ClientConfig::load().context("failed to load configuration")?,
    };

    match cli.command {
        Commands::Run {
            start_time,
            notes,
            no_delays,
        } => {
            if let Some(start_time) = start_time {
                config.flow.appointment.start_time = start_time;
            }
            if let Some(notes) = notes {
                config.flow.appointment.notes = notes;
            }
            if no_delays {
                config.flow.delays.notification_settle_ms = 0;
                config.flow.delays.invoice_settle_ms = 0;
                config.flow.delays.analytics_settle_ms = 0;
            }

            println!("Healthcare scheduling integration flow");
            println!("Services expected on:");
            println!("  patient      {}", config.services.patient.base_url);
            println!("  doctor       {}", config.services.doctor.base_url);
            println!("  appointment  {}", config.services.appointment.base_url);
            println!("  notification {}", config.services.notification.base_url);
            println!("  billing      {}", config.services.billing.base_url);
            println!("  analytics    {}", config.services.analytics.base_url);
            println!();

            info!("Starting complete workflow");
            let flow = CompleteFlow::new(config)?;
            let report = flow.run().await;
            print_report(&report);

            if report.success {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Config => {
            let rendered =
                toml::to_string_pretty(&config).context("failed to render configuration")?;
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_report(report: &FlowReport) {
    let ctx = &report.context;

    println!();
    println!("Summary:");
    if let Some(name) = &ctx.patient_name {
        println!("  ✓ Patient registered: {name}");
    }
    if let Some(name) = &ctx.doctor_name {
        println!("  ✓ Doctor registered: {name}");
    }
    if let (Some(id), Some(status)) = (&ctx.appointment_id, &ctx.appointment_status) {
        println!("  ✓ Appointment {id} scheduled (initial status: {status})");
    }
    if let Some(notifications) = &ctx.notifications {
        println!("  ✓ {} notifications sent to patient", notifications.len());
    }
    if let Some(billing) = &ctx.billing {
        println!(
            "  ✓ Invoice {}: ${:.2} ({})",
            billing.invoice.id, billing.invoice.total, billing.invoice.status
        );
        println!(
            "  ✓ Payment {}: ${:.2} ({}) via {}",
            billing.payment.id,
            billing.payment.amount,
            billing.payment.status,
            billing
                .payment
                .transaction_id
                .as_deref()
                .unwrap_or("N/A")
        );
    }
    if let Some(overview) = &ctx.analytics.overview {
        println!(
            "  ✓ System: {} ({} events tracked)",
            overview.system_status.as_deref().unwrap_or("N/A"),
            overview.total_events_tracked
        );
    }
    if let Some(stats) = &ctx.analytics.statistics {
        println!(
            "  ✓ Appointments: {} total, {} completed ({:.1}%)",
            stats.total_appointments, stats.completed, stats.completion_rate
        );
    }
    if let Some(revenue) = &ctx.analytics.revenue {
        println!(
            "  ✓ Revenue: ${:.2} across {} transactions",
            revenue.total_revenue, revenue.total_transactions
        );
    }
    if let Some(metrics) = &ctx.analytics.doctor_utilization {
        println!(
            "  ✓ Doctor: {} appointments, {:.1}% completion, {:.1}/5.0 rating",
            metrics.total_appointments, metrics.completion_rate, metrics.average_rating
        );
    }

    for warning in &ctx.warnings {
        println!("  ⚠ {warning}");
    }

    println!();
    if report.success {
        println!("✓ Complete flow executed successfully");
    } else {
        println!(
            "✗ Flow failed: {}",
            report.error.as_deref().unwrap_or("unknown error")
        );
        println!("  Make sure all backing services are running");
    }
}
