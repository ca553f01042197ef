use serde::{Deserialize, Serialize};

use crate::{
    error::{CountyError, CountyResult},
    field::NumericField,
    parser::parse_float_prefix,
    types::{LineNo, StateCode},
};

/// Every instruction the operations file can contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Display,
    FilterState {
        state: StateCode,
    },
    Filter {
        field:     NumericField,
        cmp:       Comparison,
        threshold: f64,
    },
    PopulationTotal,
    Population {
        field: NumericField,
    },
    Percent {
        field: NumericField,
    },
}

impl Command {
    /// The verb as written in an operations file.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Display            => "display",
            Self::FilterState { .. } => "filter-state",
            Self::Filter { .. }      => "filter",
            Self::PopulationTotal    => "population-total",
            Self::Population { .. }  => "population",
            Self::Percent { .. }     => "percent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Ge,
    Le,
}

impl Comparison {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ge" => Some(Self::Ge),
            "le" => Some(Self::Le),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ge => "ge",
            Self::Le => "le",
        }
    }

    pub fn keeps(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Ge => value >= threshold,
            Self::Le => value <= threshold,
        }
    }
}

/// Parse one instruction line.
///
/// Blank lines yield `Ok(None)`. Empty tokens between delimiters are
/// ignored, so `filter-state::CA` is `filter-state:CA`.
pub fn parse_command(line: &str, line_no: LineNo, delimiter: char) -> CountyResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut tokens = line.split(delimiter).filter(|t| !t.is_empty());
    let verb = tokens.next().ok_or(CountyError::MalformedCommand {
        line: line_no,
        usage: "missing operation name",
    })?;
    let args: Vec<&str> = tokens.collect();

    let command = match verb {
        "display" => {
            let [] = expect_args::<0>(&args, line_no, "display takes no arguments")?;
            Command::Display
        }
        "filter-state" => {
            let [state] = expect_args::<1>(&args, line_no, "filter-state requires a state code")?;
            Command::FilterState { state: state.to_string() }
        }
        "filter" => {
            let [field, cmp, number] =
                expect_args::<3>(&args, line_no, "filter requires field:op:number")?;
            let field = NumericField::from_name(field).ok_or_else(|| CountyError::InvalidField {
                verb: "filter",
                field: field.to_string(),
                line: line_no,
            })?;
            let threshold = parse_float_prefix(number).ok_or_else(|| CountyError::InvalidNumber {
                text: number.to_string(),
                line: line_no,
            })?;
            let cmp = Comparison::parse(cmp).ok_or_else(|| CountyError::InvalidComparison {
                cmp: cmp.to_string(),
                line: line_no,
            })?;
            Command::Filter { field, cmp, threshold }
        }
        "population-total" => {
            let [] = expect_args::<0>(&args, line_no, "population-total takes no arguments")?;
            Command::PopulationTotal
        }
        "population" => {
            let [field] = expect_args::<1>(&args, line_no, "population requires a field")?;
            Command::Population { field: population_subfield("population", field, line_no)? }
        }
        "percent" => {
            let [field] = expect_args::<1>(&args, line_no, "percent requires a field")?;
            Command::Percent { field: population_subfield("percent", field, line_no)? }
        }
        other => {
            return Err(CountyError::UnknownCommand { verb: other.to_string(), line: line_no });
        }
    };
    Ok(Some(command))
}

fn expect_args<'a, const N: usize>(
    args:    &[&'a str],
    line_no: LineNo,
    usage:   &'static str,
) -> CountyResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| CountyError::MalformedCommand { line: line_no, usage })
}

fn population_subfield(verb: &'static str, name: &str, line_no: LineNo) -> CountyResult<NumericField> {
    NumericField::from_name(name)
        .filter(NumericField::is_population_subfield)
        .ok_or_else(|| CountyError::InvalidField { verb, field: name.to_string(), line: line_no })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> CountyResult<Option<Command>> {
        parse_command(line, 7, ':')
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(matches!(parse(""), Ok(None)));
        assert!(matches!(parse("   \t\r\n"), Ok(None)));
    }

    #[test]
    fn filter_parses_all_three_arguments() {
        let cmd = parse("filter:Education.High School or Higher:ge:60\n").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Filter {
                field:     NumericField::EduHighSchool,
                cmp:       Comparison::Ge,
                threshold: 60.0,
            })
        );
    }

    #[test]
    fn empty_tokens_are_ignored() {
        assert_eq!(
            parse("filter-state::CA").unwrap(),
            Some(Command::FilterState { state: "CA".into() })
        );
    }

    #[test]
    fn unknown_verb_reports_line() {
        let err = parse("sort:State").unwrap_err();
        assert!(matches!(err, CountyError::UnknownCommand { ref verb, line: 7 } if verb == "sort"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn wrong_arity_is_malformed() {
        assert!(matches!(parse("filter-state"), Err(CountyError::MalformedCommand { line: 7, .. })));
        assert!(matches!(parse("display:extra"), Err(CountyError::MalformedCommand { .. })));
        assert!(matches!(
            parse("filter:Income.Per Capita Income:ge"),
            Err(CountyError::MalformedCommand { .. })
        ));
    }

    #[test]
    fn filter_rejects_identity_fields() {
        assert!(matches!(parse("filter:State:ge:1"), Err(CountyError::InvalidField { verb: "filter", .. })));
    }

    #[test]
    fn filter_rejects_bad_comparison_and_number() {
        assert!(matches!(
            parse("filter:Income.Per Capita Income:gt:10"),
            Err(CountyError::InvalidComparison { ref cmp, .. }) if cmp == "gt"
        ));
        assert!(matches!(
            parse("filter:Income.Per Capita Income:le:lots"),
            Err(CountyError::InvalidNumber { ref text, .. }) if text == "lots"
        ));
    }

    #[test]
    fn population_rejects_income_and_total() {
        for field in [
            "Income.Median Household Income",
            "Income.Per Capita Income",
            "Population.2014 Population",
        ] {
            assert!(matches!(
                parse(&format!("population:{field}")),
                Err(CountyError::InvalidField { verb: "population", .. })
            ));
            assert!(matches!(
                parse(&format!("percent:{field}")),
                Err(CountyError::InvalidField { verb: "percent", .. })
            ));
        }
    }

    #[test]
    fn population_accepts_poverty() {
        assert_eq!(
            parse("percent:Income.Persons Below Poverty Level").unwrap(),
            Some(Command::Percent { field: NumericField::IncomePoverty })
        );
    }

    #[test]
    fn white_non_hispanic_accepts_both_spellings() {
        for name in NumericField::EthWhiteNonHispanic.names() {
            assert_eq!(
                parse(&format!("population:{name}")).unwrap(),
                Some(Command::Population { field: NumericField::EthWhiteNonHispanic })
            );
        }
    }
}
