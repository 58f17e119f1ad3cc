use crossterm::style::Stylize;

use adequacy::{
    procedures::{adequacy::AdequacyReport, process::{Outcome, StatementResult}},
    types::err::ErrorKind,
};

/// Writes statement results as text, with or without colour.
#[derive(Clone, Copy)]
pub struct TextWriter {
    pub colour: bool,
}

impl TextWriter {
    fn good(&self, text: &str) -> String {
        match self.colour {
            true => text.green().to_string(),
            false => text.to_string(),
        }
    }

    fn bad(&self, text: &str) -> String {
        match self.colour {
            true => text.red().to_string(),
            false => text.to_string(),
        }
    }

    fn value(&self, value: bool) -> String {
        match self.colour {
            true => value.to_string().cyan().bold().to_string(),
            false => value.to_string(),
        }
    }

    fn adequacy(&self, report: &AdequacyReport) -> String {
        match report.adequate {
            true => format!("{} is {}", report.opset, self.good("adequate")),
            false => {
                let retained = report
                    .retained
                    .iter()
                    .map(|property| property.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "{} is {} (every operator is {retained})",
                    report.opset,
                    self.bad("not adequate")
                )
            }
        }
    }

    fn error(&self, e: &ErrorKind) -> String {
        format!("{} {e}", self.bad("error:"))
    }

    /// A line describing `result`.
    pub fn line(&self, result: &StatementResult) -> String {
        let description = match &result.outcome {
            Ok(Outcome::Declared(declaration)) => format!(
                "declared {} {}",
                declaration.namespace,
                declaration.names.join(", ")
            ),

            Ok(Outcome::Evaluated {
                formula,
                valuation,
                value,
            }) => format!("{formula} with {valuation} is {}", self.value(*value)),

            Ok(Outcome::Adequacy(report)) => self.adequacy(report),

            Err(e) => self.error(e),
        };

        format!("[{}] {}: {description}", result.index, result.kind)
    }
}

/// The results as a JSON array.
pub fn json(results: &[StatementResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adequacy::{context::process_program, structures::program::Program};

    #[test]
    fn plain_lines() {
        let program: Program = "
            DEFINE VARIABLE p, q;
            DEFINE VARIABLE p;
            DEFINE FORMULA f = p | q;
            DEFINE VALUATION v = { p: false, q: true };
            EVALUATE f WITH v;
            DEFINE OPSET s = { AND };
            ADEQUATE s;
        "
        .parse()
        .unwrap();

        let results = process_program(&program);
        let writer = TextWriter { colour: false };

        assert_eq!(writer.line(&results[0]), "[0] DEFINE VARIABLE: declared variable p, q");
        assert_eq!(
            writer.line(&results[1]),
            "[1] DEFINE VARIABLE: error: variable 'p' is already declared"
        );
        assert_eq!(writer.line(&results[4]), "[4] EVALUATE: f with v is true");
        assert!(writer.line(&results[6]).starts_with("[6] ADEQUATE: s is not adequate"));

        assert!(json(&results).is_ok());
    }
}
