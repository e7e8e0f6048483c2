//! Output Formatting

use serde::Serialize;

use crate::commands::OutputFormat;
use crate::error::CliResult;

/// Render data in the requested format
pub fn render<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Compact => serde_json::to_string(data)?,
    };
    Ok(text)
}

/// Render and print to stdout
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    println!("{}", render(data, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_client::TeamDto;

    #[test]
    fn test_compact_is_single_line() {
        let team = TeamDto {
            id: Some(1),
            name: Some("Ferrari".to_string()),
            ..Default::default()
        };
        let text = render(&team, OutputFormat::Compact).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.contains("\"name\":\"Ferrari\""));
    }

    #[test]
    fn test_json_is_pretty() {
        let team = TeamDto {
            id: Some(1),
            ..Default::default()
        };
        let text = render(&team, OutputFormat::Json).unwrap();
        assert!(text.contains('\n'));
    }
}
