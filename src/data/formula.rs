use thiserror::Error;

use super::model::{Listing, ListingDataset, NumericColumn};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong with a user formula. All variants carry a
/// message fit for direct display next to the formula input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("malformed number '{0}'")]
    BadNumber(String),
    #[error("unexpected '{0}'")]
    UnexpectedToken(String),
    #[error("formula ends unexpectedly")]
    UnexpectedEnd,
    #[error("unknown column '{0}' (columns: PRICE, BEDS, BATH, PROPERTYSQFT, LATITUDE, LONGITUDE)")]
    UnknownColumn(String),
    #[error("division by zero at listing {row}")]
    DivisionByZero { row: usize },
}

// ---------------------------------------------------------------------------
// Expression AST
// ---------------------------------------------------------------------------

/// A parsed formula. Column references are bound to the whitelist at parse
/// time, so an [`Expr`] can only ever read listing fields — no dynamic
/// evaluation of user text happens anywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Column(NumericColumn),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Column(NumericColumn),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(v) => format!("{v}"),
            Token::Column(col) => col.name().to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut text = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_digit() || ch == '.' || ch == '_' {
                        // Allow 1_000_000 the way Rust literals do.
                        if ch != '_' {
                            text.push(ch);
                        }
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = text
                    .parse()
                    .map_err(|_| FormulaError::BadNumber(text.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() => {
                let mut name = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_alphanumeric() || ch == '_' {
                        name.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let column = NumericColumn::from_name(&name)
                    .ok_or_else(|| FormulaError::UnknownColumn(name.clone()))?;
                tokens.push(Token::Column(column));
            }
            other => return Err(FormulaError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

// ---------------------------------------------------------------------------
// Recursive-descent parser
// ---------------------------------------------------------------------------

// Grammar:
//   expr   := term (('+' | '-') term)*
//   term   := factor (('*' | '/') factor)*
//   factor := '-' factor | NUMBER | COLUMN | '(' expr ')'
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse(&mut self) -> Result<Expr, FormulaError> {
        let expr = self.parse_expr()?;
        match self.peek() {
            None => Ok(expr),
            Some(tok) => Err(FormulaError::UnexpectedToken(tok.describe())),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, FormulaError> {
        let mut left = self.parse_term()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Plus => {
                    self.consume();
                    let right = self.parse_term()?;
                    left = Expr::Add(Box::new(left), Box::new(right));
                }
                Token::Minus => {
                    self.consume();
                    let right = self.parse_term()?;
                    left = Expr::Sub(Box::new(left), Box::new(right));
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, FormulaError> {
        let mut left = self.parse_factor()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Star => {
                    self.consume();
                    let right = self.parse_factor()?;
                    left = Expr::Mul(Box::new(left), Box::new(right));
                }
                Token::Slash => {
                    self.consume();
                    let right = self.parse_factor()?;
                    left = Expr::Div(Box::new(left), Box::new(right));
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, FormulaError> {
        match self.consume() {
            None => Err(FormulaError::UnexpectedEnd),
            Some(Token::Minus) => Ok(Expr::Neg(Box::new(self.parse_factor()?))),
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Column(column)) => Ok(Expr::Column(column)),
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                match self.consume() {
                    Some(Token::RParen) => Ok(inner),
                    Some(tok) => Err(FormulaError::UnexpectedToken(tok.describe())),
                    None => Err(FormulaError::UnexpectedEnd),
                }
            }
            Some(tok) => Err(FormulaError::UnexpectedToken(tok.describe())),
        }
    }
}

/// Parse a formula into a bound expression.
pub fn parse(input: &str) -> Result<Expr, FormulaError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }
    Parser::new(tokens).parse()
}

// ---------------------------------------------------------------------------
// Row-wise evaluation
// ---------------------------------------------------------------------------

/// Evaluate a formula for every listing in the view, in view order.
///
/// Missing square footage flows through as NaN; dividing by zero anywhere
/// fails the whole evaluation, reporting the first offending row.
pub fn evaluate(
    dataset: &ListingDataset,
    view: &[usize],
    expression: &str,
) -> Result<Vec<f64>, FormulaError> {
    let expr = parse(expression)?;
    view.iter()
        .map(|&idx| eval_row(&expr, &dataset.listings[idx], idx))
        .collect()
}

fn eval_row(expr: &Expr, listing: &Listing, row: usize) -> Result<f64, FormulaError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Column(column) => Ok(column.value(listing).unwrap_or(f64::NAN)),
        Expr::Neg(inner) => Ok(-eval_row(inner, listing, row)?),
        Expr::Add(lhs, rhs) => Ok(eval_row(lhs, listing, row)? + eval_row(rhs, listing, row)?),
        Expr::Sub(lhs, rhs) => Ok(eval_row(lhs, listing, row)? - eval_row(rhs, listing, row)?),
        Expr::Mul(lhs, rhs) => Ok(eval_row(lhs, listing, row)? * eval_row(rhs, listing, row)?),
        Expr::Div(lhs, rhs) => {
            let denominator = eval_row(rhs, listing, row)?;
            if denominator == 0.0 {
                return Err(FormulaError::DivisionByZero { row });
            }
            Ok(eval_row(lhs, listing, row)? / denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(beds: u32, baths: f64, price: f64, sqft: Option<f64>) -> Listing {
        Listing {
            broker: None,
            property_type: "House for sale".to_string(),
            price,
            beds,
            baths,
            sqft,
            address: "1 Main St".to_string(),
            state: "New York, NY 10001".to_string(),
            sublocality: "Queens".to_string(),
            latitude: 40.7,
            longitude: -74.0,
        }
    }

    fn dataset() -> ListingDataset {
        ListingDataset::from_listings(vec![
            make_listing(2, 1.0, 100_000.0, Some(800.0)),
            make_listing(3, 2.0, 300_000.0, None),
        ])
    }

    #[test]
    fn price_per_bed_worked_example() {
        let ds = dataset();
        let values = evaluate(&ds, &[0, 1], "PRICE / BEDS").unwrap();
        assert_eq!(values, vec![50_000.0, 100_000.0]);
    }

    #[test]
    fn unknown_column_is_an_error_not_a_crash() {
        let ds = dataset();
        let err = evaluate(&ds, &[0, 1], "PRICE / ZZZ").unwrap_err();
        assert_eq!(err, FormulaError::UnknownColumn("ZZZ".to_string()));
    }

    #[test]
    fn column_names_are_case_insensitive() {
        let ds = dataset();
        let values = evaluate(&ds, &[0], "price + bath").unwrap();
        assert_eq!(values, vec![100_001.0]);
    }

    #[test]
    fn precedence_and_parentheses() {
        let ds = dataset();
        assert_eq!(evaluate(&ds, &[0], "1 + 2 * 3").unwrap(), vec![7.0]);
        assert_eq!(evaluate(&ds, &[0], "(1 + 2) * 3").unwrap(), vec![9.0]);
        assert_eq!(evaluate(&ds, &[0], "10 - 4 - 3").unwrap(), vec![3.0]);
    }

    #[test]
    fn unary_minus() {
        let ds = dataset();
        assert_eq!(evaluate(&ds, &[0], "-BEDS * 2").unwrap(), vec![-4.0]);
    }

    #[test]
    fn division_by_zero_reports_the_row() {
        let ds = ListingDataset::from_listings(vec![
            make_listing(2, 1.0, 100_000.0, Some(800.0)),
            make_listing(0, 1.0, 300_000.0, None),
        ]);
        let err = evaluate(&ds, &[0, 1], "PRICE / BEDS").unwrap_err();
        assert_eq!(err, FormulaError::DivisionByZero { row: 1 });
    }

    #[test]
    fn missing_sqft_evaluates_to_nan() {
        let ds = dataset();
        let values = evaluate(&ds, &[0, 1], "PROPERTYSQFT * 2").unwrap();
        assert_eq!(values[0], 1_600.0);
        assert!(values[1].is_nan());
    }

    #[test]
    fn malformed_syntax_is_reported() {
        assert_eq!(parse(""), Err(FormulaError::Empty));
        assert_eq!(parse("   "), Err(FormulaError::Empty));
        assert_eq!(parse("PRICE +"), Err(FormulaError::UnexpectedEnd));
        assert_eq!(parse("(PRICE"), Err(FormulaError::UnexpectedEnd));
        assert_eq!(
            parse("PRICE BEDS"),
            Err(FormulaError::UnexpectedToken("BEDS".to_string()))
        );
        assert_eq!(parse("PRICE @ 2"), Err(FormulaError::UnexpectedChar('@')));
        assert_eq!(
            parse("1.2.3"),
            Err(FormulaError::BadNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn empty_view_evaluates_to_no_rows() {
        let ds = dataset();
        assert_eq!(evaluate(&ds, &[], "PRICE / BEDS").unwrap(), Vec::<f64>::new());
    }
}
