use std::io::Write;

use livemark_core::LiveInstrumentData;

use crate::error::CliError;

pub fn render(data: &LiveInstrumentData, pretty: bool) -> Result<(), CliError> {
    let text = to_json(data, pretty)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

fn to_json(data: &LiveInstrumentData, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use livemark_core::LiveStockData;

    use super::*;

    #[test]
    fn compact_output_is_a_single_line() {
        let data = LiveInstrumentData::from(LiveStockData {
            currency: String::from("EUR"),
            last_price: 14.2,
        });

        let text = to_json(&data, false).expect("serializes");
        assert_eq!(text, r#"{"kind":"stock","currency":"EUR","last_price":14.2}"#);

        let pretty = to_json(&data, true).expect("serializes");
        assert!(pretty.contains('\n'));
    }
}
