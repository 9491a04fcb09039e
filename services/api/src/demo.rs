use chrono::{Local, NaiveDate};
use clap::Args;
use docmint::config::AppConfig;
use docmint::error::AppError;
use docmint::workflows::numbering::{generate_document_number, parse_document_number};
use docmint::workflows::templates::standard::{
    standard_variables, CompanySnapshot, ContactSnapshot, ProjectSnapshot,
};
use docmint::workflows::templates::{
    analyze_template, replace_placeholders, validate_variable_value,
};

const DEMO_TEMPLATE: &str = "\
Quotation {{quotation_number}}
Project: {{project_name}} ({{status}})
Client: {{company_name}} / {{contact_info}}
Delivery: {{delivery_date}}
Total: {{price}} (tax {{tax_amount}})
";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Project date for the demo document (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Per-day serial for the demo document number
    #[arg(long, default_value_t = 1)]
    pub(crate) counter: u16,
}

#[derive(Args, Debug)]
pub(crate) struct NumberGenerateArgs {
    /// Document date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Reserved per-day serial (1-999)
    #[arg(long)]
    pub(crate) counter: u16,
}

#[derive(Args, Debug)]
pub(crate) struct NumberParseArgs {
    /// Document number to decode (e.g. HIYES25JBA001)
    pub(crate) value: String,
}

pub(crate) fn run_number_generate(args: NumberGenerateArgs) -> Result<(), AppError> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let number = generate_document_number(date, args.counter)?;
    println!("{number}");
    Ok(())
}

pub(crate) fn run_number_parse(args: NumberParseArgs) -> Result<(), AppError> {
    match parse_document_number(&args.value) {
        Some(parsed) => {
            println!("year:    {}", parsed.year);
            println!("month:   {}", parsed.month);
            println!("day:     {}", parsed.day);
            println!("counter: {}", parsed.counter);
            match parsed.date {
                Some(date) => println!("date:    {date}"),
                None => println!("date:    (not a calendar date)"),
            }
        }
        None => println!("{}: not a HIYES document number", args.value),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    println!("=== Template analysis ===");
    let analysis = analyze_template(DEMO_TEMPLATE);
    println!(
        "{} placeholders, {} need form input",
        analysis.all.len(),
        analysis.extra.len()
    );
    for variable_config in analysis.configs() {
        println!(
            "  {:<18} {:<8} label={:?} required={}",
            variable_config.name,
            variable_config.kind.html_input_type(),
            variable_config.label,
            variable_config.required,
        );
    }

    println!();
    println!("=== Validation ===");
    let status = analysis
        .configs()
        .into_iter()
        .find(|config| config.name == "status")
        .expect("demo template contains status");
    for value in ["in_progress", "archived", ""] {
        let outcome = validate_variable_value(value, &status);
        match outcome.error {
            Some(error) => println!("  status={value:?} rejected: {error}"),
            None => println!("  status={value:?} accepted"),
        }
    }

    println!();
    println!("=== Document generation ===");
    let project = ProjectSnapshot {
        name: "Office Fit-Out".to_string(),
        price: 84_000.0,
        date,
    };
    let company = CompanySnapshot {
        name: "Northgate Ltd".to_string(),
        address: "22 Harbor Rd".to_string(),
    };
    let contact = ContactSnapshot {
        name: "Chen Yu".to_string(),
        email: "chen.yu@example.com".to_string(),
        phone: Some("0912-345-678".to_string()),
    };
    let now = Local::now().naive_local();
    let variables = standard_variables(
        &project,
        &company,
        &contact,
        args.counter,
        config.documents.tax_rate,
        now,
    )?;

    println!("document number: {}", variables["document_number"]);
    println!();
    println!("{}", replace_placeholders(DEMO_TEMPLATE, &variables));

    Ok(())
}
