use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Parser;
use portal_core::error::phone::PhoneError;
use portal_core::phone::{inspect, PhoneReport};

/// Phone number tools.
#[derive(Parser)]
pub struct PhoneOpts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Check(CheckOpts),
}

/// Validates a phone number and shows its country, carrier and normalized forms.
#[derive(Parser)]
struct CheckOpts {
    /// The number, in local (0712 345 678) or international (+254 712 345 678) form.
    phone: String,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(_env: &dyn Environment, opts: PhoneOpts) -> PortalResult {
    match opts.subcmd {
        SubCommand::Check(v) => check(v),
    }
}

fn check(opts: CheckOpts) -> PortalResult {
    if opts.phone.trim().is_empty() {
        return Err(PhoneError::Missing.into());
    }
    let report = inspect(&opts.phone);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }
    if !report.valid {
        return Err(PhoneError::InvalidFormat(opts.phone.trim().to_string()).into());
    }
    Ok(())
}

fn render(report: &PhoneReport) -> String {
    let mut out = format!("Number:     {}\n", report.input.trim());
    if !report.valid {
        out.push_str("Valid:      no\n");
        return out;
    }
    out.push_str("Valid:      yes\n");
    if let (Some(country), Some(code)) = (report.country, report.country_code) {
        out.push_str(&format!("Country:    {country} (+{code})\n"));
    }
    out.push_str(&format!("Display:    {}\n", report.display));
    out.push_str(&format!("Normalized: {}\n", report.normalized));
    if let Some(carrier) = report.carrier {
        out.push_str(&format!("Carrier:    {carrier}\n"));
    }
    if !report.known_carriers.is_empty() {
        out.push_str(&format!("Carriers:   {}\n", report.known_carriers.join(", ")));
    }
    out
}
