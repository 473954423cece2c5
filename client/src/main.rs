use anyhow::Result;
use clap::Parser;

use client::{ContactApiClient, ContactForm, FormField, FormStatus};

#[derive(Parser)]
#[command(name = "contact")]
#[command(about = "Submit a contact form to the Mero Tech API")]
struct Args {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    company: String,

    #[arg(long)]
    project_type: String,

    #[arg(long)]
    message: String,

    #[arg(long, default_value = "http://localhost:3001")]
    endpoint: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client=info".into()),
        )
        .init();

    let mut form = ContactForm::new();
    form.set_field(FormField::Name, args.name);
    form.set_field(FormField::Email, args.email);
    form.set_field(FormField::Company, args.company);
    form.set_field(FormField::ProjectType, args.project_type);
    form.set_field(FormField::Message, args.message);

    let api = ContactApiClient::new(&args.endpoint);

    match form.submit(&api).await {
        FormStatus::Success => {
            println!("{}", form.message().unwrap_or("Submitted."));
            Ok(())
        }
        FormStatus::Idle => {
            eprintln!("Submission not sent; fix the following fields:");
            for field in [
                FormField::Name,
                FormField::Email,
                FormField::Company,
                FormField::ProjectType,
                FormField::Message,
            ] {
                if let Some(message) = form.field_error(field) {
                    eprintln!("  {}: {}", field.as_str(), message);
                }
            }
            std::process::exit(1);
        }
        FormStatus::Error | FormStatus::Submitting => {
            eprintln!(
                "Submission failed: {}",
                form.message().unwrap_or("unknown error")
            );
            std::process::exit(1);
        }
    }
}
