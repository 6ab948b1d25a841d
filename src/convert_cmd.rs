use std::fmt::{self, Write};

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info_span;

use parsi_calendar::{gregorian_to_parsi, Variant};

use crate::cli::ConvertArgs;

/// Print the Parsi date of one Gregorian date.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    print!("{}", render(args.date, args.variant)?);
    Ok(())
}

fn render(date: NaiveDate, variant: Option<Variant>) -> Result<String, fmt::Error> {
    let variants = match variant {
        Some(v) => vec![v],
        None => Variant::ALL.to_vec(),
    };

    let mut out = String::new();
    for v in variants {
        let label = format!("{}:", v.label());
        writeln!(out, "{label:<12} {}", gregorian_to_parsi(&date, v))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_variant() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        assert_eq!(
            render(date, Some(Variant::Shahenshahi)).unwrap(),
            "Shahenshahi: 3 Fravardin 1394 YZ\n"
        );
    }

    #[test]
    fn renders_all_variants_by_default() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let out = render(date, None).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("Kadmi:       1 Ardibehesht 1394 YZ"));
    }
}
