//! Price command

use crate::app::{OutputFormat, PriceArgs};
use crate::output::format_price_range;
use anyhow::Result;
use storegenius_core::parse_price_range;

pub fn run(args: &PriceArgs, format: OutputFormat) -> Result<()> {
    let text = args.text.join(" ");
    let range = parse_price_range(&text);
    print!("{}", format_price_range(range.as_ref(), format)?);
    Ok(())
}
