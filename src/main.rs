use clap::Parser;
use serde::Serialize;
use shipping_calc::utils::error::{AppError, ErrorSeverity};
use shipping_calc::utils::{logger, validation::Validate};
use shipping_calc::{
    apply_discount, calc_shipment_from_items, calc_shipping_fee, format_fee, CliConfig,
    FeeResolution,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteOutput<'a> {
    #[serde(flatten)]
    quote: &'a FeeResolution,
    display: String,
    discounted_fee: u32,
}

fn exit_code(e: &AppError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 需人工報價
        ErrorSeverity::High => 1,   // 輸入錯誤
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: AppError) -> ! {
    tracing::error!(
        "❌ Quote failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }
    let discount = config.discount().unwrap_or_else(|e| fail(e));

    let result = if config.quantity == 1 {
        calc_shipping_fee(&config.weight_input())
    } else {
        calc_shipment_from_items(&[config.line_item()])
    };
    let quote = result.unwrap_or_else(|e| fail(e.into()));

    let display = format_fee(quote.fee, quote.bill_kg);
    let discounted_fee = apply_discount(quote.fee, discount.as_ref());

    if config.json {
        let output = QuoteOutput {
            quote: &quote,
            display,
            discounted_fee,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "📦 Billable weight: {} kg (actual {} kg, volumetric {} kg)",
        quote.bill_kg, quote.actual_kg, quote.volumetric_kg
    );
    match quote.bag_spec {
        Some(spec) => println!(
            "💰 Shipping fee: {} [{} / {}]",
            display,
            quote.tier.as_str(),
            spec.as_str()
        ),
        None => println!("💰 Shipping fee: {} [{}]", display, quote.tier.as_str()),
    }
    if discount.is_some() {
        println!("🏷️ After discount: {}", format_fee(discounted_fee, quote.bill_kg));
    }

    Ok(())
}
