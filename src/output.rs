use anyhow::Context as _;
use clap::ValueEnum;
use serde::Serialize;

/// Text format for everything the CLI prints or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut rendered =
                serde_json::to_string_pretty(value).context("serialize output json")?;
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("serialize output yaml"),
    }
}

pub fn emit<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render(value, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        count: usize,
    }

    #[test]
    fn render_json_is_pretty_and_newline_terminated() -> anyhow::Result<()> {
        let rendered = render(&Sample { name: "x", count: 2 }, OutputFormat::Json)?;
        assert!(rendered.contains("\"name\": \"x\""));
        assert!(rendered.ends_with("}\n"));
        Ok(())
    }

    #[test]
    fn render_yaml_uses_plain_keys() -> anyhow::Result<()> {
        let rendered = render(&Sample { name: "x", count: 2 }, OutputFormat::Yaml)?;
        assert!(rendered.contains("name: x"));
        assert!(rendered.contains("count: 2"));
        Ok(())
    }
}
