/*!
The grammar of a program, written with [nom] parser combinators.

Whitespace and comments are skipped before each lexeme, and are logged on the lexer target when [trace_lexemes](crate::config::Config::trace_lexemes) is set.
Keywords are matched without regard to case, while identifiers keep their case.

Expressions are parsed with the following precedence, from loosest to tightest:

| Connective | Symbol | Keyword | Associativity |
|------------|--------|---------|---------------|
| Iff        | `<->`  | `IFF`   | right         |
| Implies    | `->`   | `IMPLIES`, `THEN` | right |
| Or         | <code>&#124;</code> | `OR` | left |
| And        | `&`    | `AND`   | left          |
| Not        | `!`, `~` | `NOT` | prefix        |

Primaries are variables, formula references (`@f`), operator applications (`op(e1, …, en)`), and parenthesised expressions.
Chains of binary connectives are grouped by precedence with a stack of operands and a stack of connectives, and prefixes of negations are counted, so only parentheses and applications recurse.
Both the nesting of parentheses and applications, and the depth of the expression read, are bounded by [max_expression_depth](crate::config::Config::max_expression_depth).

The grammar makes no use of the symbol tables, and so, e.g., an undeclared variable is only noted when the statement is processed.

Parsers return a [SyntaxError] which records where the parse failed, and [Grammar::parse_error] turns this into a [ParseError] with a line and column.
*/

use std::cmp::Ordering;

use nom::{
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::satisfy,
    combinator::{opt, recognize, value},
    multi::separated_list1,
    sequence::pair,
    Err as NomErr, IResult,
};

use crate::{
    config::Config,
    misc::log::targets,
    structures::{
        connective::{BinaryOperator, TruthValue},
        expression::Expression,
        operator::CustomOperator,
        program::{Program, Statement},
        truth_table::{PatternValue, TruthTable, TruthTableEntry},
    },
    types::err::ParseError,
};

const KEYWORDS: [&str; 18] = [
    "DEFINE",
    "VARIABLE",
    "FORMULA",
    "VALUATION",
    "OPERATOR",
    "OPSET",
    "EVALUATE",
    "WITH",
    "ADEQUATE",
    "OTHERWISE",
    "TRUE",
    "FALSE",
    "NOT",
    "AND",
    "OR",
    "IMPLIES",
    "THEN",
    "IFF",
];

/// Keywords which name a built-in connective within an opset.
const CONNECTIVES: [&str; 6] = ["NOT", "AND", "OR", "IMPLIES", "THEN", "IFF"];

/// Every symbol, longest first.
const SYMBOLS: [&str; 17] = [
    "<->", "->", "(", ")", "{", "}", ",", ":", ";", "=", "@", "&", "|", "!", "~", "1", "0",
];

/// The binary connectives, with the symbols and keywords which spell each.
const PRECEDENCE: [(BinaryOperator, &[&str], &[&str]); 4] = [
    (BinaryOperator::Iff, &["<->"], &["IFF"]),
    (BinaryOperator::Implies, &["->"], &["IMPLIES", "THEN"]),
    (BinaryOperator::Or, &["|"], &["OR"]),
    (BinaryOperator::And, &["&"], &["AND"]),
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Something described was expected.
    Expected(&'static str),

    UnterminatedComment,

    /// The configured depth was exceeded.
    TooDeep(usize),

    /// Some combinator failed, to be recovered from or described by an enclosing parser.
    Nom(nom::error::ErrorKind),
}

/// An error, together with the input remaining where the error was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError<'s> {
    pub input: &'s str,
    pub kind: SyntaxErrorKind,
}

impl<'s> nom::error::ParseError<&'s str> for SyntaxError<'s> {
    fn from_error_kind(input: &'s str, kind: nom::error::ErrorKind) -> Self {
        Self {
            input,
            kind: SyntaxErrorKind::Nom(kind),
        }
    }

    fn append(_: &'s str, _: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

pub type PResult<'s, T> = IResult<&'s str, T, SyntaxError<'s>>;

/// An expression, with the depth of the expression.
type Operand = (Expression, usize);

/// An opening and closing symbol, with the descriptions used when either is missing.
#[derive(Clone, Copy)]
struct Delimiters {
    open: &'static str,
    expect_open: &'static str,
    close: &'static str,
    expect_close: &'static str,
}

const BRACES: Delimiters = Delimiters {
    open: "{",
    expect_open: "'{'",
    close: "}",
    expect_close: "',' or '}'",
};

const PARENS: Delimiters = Delimiters {
    open: "(",
    expect_open: "'('",
    close: ")",
    expect_close: "',' or ')'",
};

/// An identifier shaped word, which may be a keyword or the wildcard.
fn word(input: &str) -> PResult<'_, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

/// A description of the lexeme at the start of `input`, or the character which begins no lexeme.
fn describe(input: &str) -> Result<String, char> {
    if let Ok((_, word)) = word(input) {
        let description = match KEYWORDS.iter().find(|k| k.eq_ignore_ascii_case(word)) {
            Some(keyword) => keyword.to_string(),
            None if word == "_" => "'_'".to_string(),
            None => format!("identifier '{word}'"),
        };
        return Ok(description);
    }

    if let Some(symbol) = SYMBOLS.iter().find(|symbol| input.starts_with(**symbol)) {
        return Ok(format!("'{symbol}'"));
    }

    match input.chars().next() {
        Some(c) => Err(c),
        None => Ok("the end of input".to_string()),
    }
}

/// The grammar, over some source text.
pub struct Grammar<'s> {
    source: &'s str,
    trace: bool,
    max_depth: usize,
}

impl<'s> Grammar<'s> {
    pub fn new(source: &'s str, config: &Config) -> Self {
        Self {
            source,
            trace: config.trace_lexemes.value,
            max_depth: config.max_expression_depth.value,
        }
    }

    /// The line and column of the start of `input`, a suffix of the source.
    pub fn position(&self, input: &'s str) -> (usize, usize) {
        let offset = self.source.len().saturating_sub(input.len());
        let before = self.source.get(..offset).unwrap_or_default();
        let line = before.matches('\n').count() + 1;
        let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
        (line, column)
    }

    fn trace(&self, input: &'s str, lexeme: std::fmt::Arguments) {
        if self.trace {
            let (line, column) = self.position(input);
            log::debug!(target: targets::LEXER, "{line}:{column}: {lexeme}");
        } else if log::log_enabled!(target: targets::LEXER, log::Level::Trace) {
            let (line, column) = self.position(input);
            log::trace!(target: targets::LEXER, "{line}:{column}: {lexeme}");
        }
    }

    /// Skips whitespace and comments, noting each when `trace` is set.
    fn skip(&self, mut input: &'s str, trace: bool) -> PResult<'s, ()> {
        loop {
            if let Ok((rest, _)) = take_while1::<_, _, SyntaxError<'s>>(char::is_whitespace)(input) {
                if trace {
                    self.trace(input, format_args!("whitespace"));
                }
                input = rest;
            } else if let Ok((rest, _)) = tag::<_, _, SyntaxError<'s>>("//")(input) {
                let (rest, _) = take_while::<_, _, SyntaxError<'s>>(|c: char| c != '\n')(rest)?;
                if trace {
                    self.trace(input, format_args!("line comment"));
                }
                input = rest;
            } else if let Ok((rest, _)) = tag::<_, _, SyntaxError<'s>>("/*")(input) {
                let Ok((rest, _)) = take_until::<_, _, SyntaxError<'s>>("*/")(rest) else {
                    return Err(NomErr::Failure(SyntaxError {
                        input,
                        kind: SyntaxErrorKind::UnterminatedComment,
                    }));
                };
                let (rest, _) = tag::<_, _, SyntaxError<'s>>("*/")(rest)?;
                if trace {
                    self.trace(input, format_args!("block comment"));
                }
                input = rest;
            } else {
                return Ok((input, ()));
            }
        }
    }

    pub fn trivia(&self, input: &'s str) -> PResult<'s, ()> {
        self.skip(input, true)
    }

    /// Applies `parser`, and if `parser` fails reports `expected` at the position `parser` was applied.
    ///
    /// Failures which cannot be recovered from are passed on unchanged.
    fn expect<T>(
        &self,
        input: &'s str,
        expected: &'static str,
        mut parser: impl FnMut(&'s str) -> PResult<'s, T>,
    ) -> PResult<'s, T> {
        match parser(input) {
            Err(NomErr::Error(_)) => Err(NomErr::Failure(SyntaxError {
                input,
                kind: SyntaxErrorKind::Expected(expected),
            })),
            result => result,
        }
    }

    fn too_deep(&self, input: &'s str) -> NomErr<SyntaxError<'s>> {
        NomErr::Failure(SyntaxError {
            input,
            kind: SyntaxErrorKind::TooDeep(self.max_depth),
        })
    }

    /// The nesting within a fresh pair of parentheses opened at `input`.
    fn nested(&self, input: &'s str, nesting: usize) -> Result<usize, NomErr<SyntaxError<'s>>> {
        match nesting < self.max_depth {
            true => Ok(nesting + 1),
            false => Err(self.too_deep(input)),
        }
    }

    /// The operand, if the operand is no deeper than the configured limit.
    fn bounded(&self, input: &'s str, operand: Operand) -> Result<Operand, NomErr<SyntaxError<'s>>> {
        match operand.1 <= self.max_depth {
            true => Ok(operand),
            false => Err(self.too_deep(input)),
        }
    }

    fn symbol(&self, input: &'s str, symbol: &'static str) -> PResult<'s, &'s str> {
        let (input, _) = self.trivia(input)?;
        let (rest, matched) = tag::<_, _, SyntaxError<'s>>(symbol)(input)?;
        self.trace(input, format_args!("'{matched}'"));
        Ok((rest, matched))
    }

    /// One of `keywords`, ignoring case, returned as written in `keywords`.
    fn keyword(&self, input: &'s str, keywords: &[&'static str]) -> PResult<'s, &'static str> {
        let (input, _) = self.trivia(input)?;
        let (rest, found) = word(input)?;
        match keywords.iter().find(|k| k.eq_ignore_ascii_case(found)) {
            Some(keyword) => {
                self.trace(input, format_args!("{keyword}"));
                Ok((rest, *keyword))
            }
            None => Err(NomErr::Error(SyntaxError {
                input,
                kind: SyntaxErrorKind::Nom(nom::error::ErrorKind::Tag),
            })),
        }
    }

    /// A word which is neither a keyword nor the wildcard.
    fn identifier(&self, input: &'s str) -> PResult<'s, &'s str> {
        let (input, _) = self.trivia(input)?;
        let (rest, name) = word(input)?;
        if name == "_" || is_keyword(name) {
            return Err(NomErr::Error(SyntaxError {
                input,
                kind: SyntaxErrorKind::Nom(nom::error::ErrorKind::Verify),
            }));
        }
        self.trace(input, format_args!("identifier '{name}'"));
        Ok((rest, name))
    }

    fn name(&self, input: &'s str, expected: &'static str) -> PResult<'s, String> {
        let (input, name) = self.expect(input, expected, |i| self.identifier(i))?;
        Ok((input, name.to_string()))
    }

    /// Any of `symbols` or `keywords`.
    fn connective(
        &self,
        input: &'s str,
        symbols: &[&'static str],
        keywords: &[&'static str],
    ) -> PResult<'s, ()> {
        let (input, _) = self.trivia(input)?;
        match symbols.iter().find(|symbol| input.starts_with(**symbol)) {
            Some(symbol) => value((), |i| self.symbol(i, *symbol))(input),
            None => value((), |i| self.keyword(i, keywords))(input),
        }
    }

    /// A list of items separated by commas and enclosed by `delimiters`, which may be empty.
    fn list<T>(
        &self,
        input: &'s str,
        delimiters: Delimiters,
        item: impl FnMut(&'s str) -> PResult<'s, T>,
    ) -> PResult<'s, Vec<T>> {
        let (input, _) = self.expect(input, delimiters.expect_open, |i| {
            self.symbol(i, delimiters.open)
        })?;
        if let (rest, Some(_)) = opt(|i| self.symbol(i, delimiters.close))(input)? {
            return Ok((rest, Vec::default()));
        }

        let (input, items) = separated_list1(|i| self.symbol(i, ","), item)(input)?;
        let (input, _) = self.expect(input, delimiters.expect_close, |i| {
            self.symbol(i, delimiters.close)
        })?;
        Ok((input, items))
    }

    /// Parses each statement until the end of input.
    pub fn program(&self, mut input: &'s str) -> PResult<'s, Program> {
        let mut statements = Vec::default();
        loop {
            let (rest, _) = self.trivia(input)?;
            if rest.is_empty() {
                return Ok((rest, Program::new(statements)));
            }

            let (rest, statement) = self.statement(rest)?;
            log::debug!(target: targets::PARSER, "Parsed {}", statement.kind());
            statements.push(statement);
            input = rest;
        }
    }

    pub fn statement(&self, input: &'s str) -> PResult<'s, Statement> {
        let (input, keyword) = self.expect(input, "DEFINE, EVALUATE, or ADEQUATE", |i| {
            self.keyword(i, &["DEFINE", "EVALUATE", "ADEQUATE"])
        })?;

        let (input, statement) = match keyword {
            "DEFINE" => self.definition(input)?,

            "EVALUATE" => {
                let (input, formula) = self.name(input, "a formula name")?;
                let (input, _) = self.expect(input, "WITH", |i| self.keyword(i, &["WITH"]))?;
                let (input, valuation) = self.name(input, "a valuation name")?;
                (input, Statement::Evaluate { formula, valuation })
            }

            _ => {
                let (input, opset) = self.name(input, "an opset name")?;
                (input, Statement::Adequate { opset })
            }
        };

        let (input, _) = self.expect(input, "';'", |i| self.symbol(i, ";"))?;
        Ok((input, statement))
    }

    fn definition(&self, input: &'s str) -> PResult<'s, Statement> {
        let (input, kind) = self.expect(
            input,
            "VARIABLE, FORMULA, VALUATION, OPERATOR, or OPSET",
            |i| self.keyword(i, &["VARIABLE", "FORMULA", "VALUATION", "OPERATOR", "OPSET"]),
        )?;

        match kind {
            "VARIABLE" => {
                let (input, names) = separated_list1(
                    |i| self.symbol(i, ","),
                    |i| self.name(i, "a variable name"),
                )(input)?;
                Ok((input, Statement::DefineVariable(names)))
            }

            "FORMULA" => {
                let (input, name) = self.name(input, "a formula name")?;
                let (input, _) = self.expect(input, "'='", |i| self.symbol(i, "="))?;
                let (input, expression) = self.expression(input)?;
                Ok((input, Statement::DefineFormula { name, expression }))
            }

            "VALUATION" => {
                let (input, name) = self.name(input, "a valuation name")?;
                let (input, _) = self.expect(input, "'='", |i| self.symbol(i, "="))?;
                let (input, assignments) = self.list(input, BRACES, |i| {
                    let (i, variable) = self.name(i, "a variable name")?;
                    let (i, _) = self.expect(i, "':'", |i| self.symbol(i, ":"))?;
                    let (i, value) = self.expect(i, "a truth value", |i| self.truth_value(i))?;
                    Ok((i, (variable, value)))
                })?;
                Ok((input, Statement::DefineValuation { name, assignments }))
            }

            "OPERATOR" => {
                let (input, operator) = self.operator(input)?;
                Ok((input, Statement::DefineOperator(operator)))
            }

            _ => {
                let (input, name) = self.name(input, "an opset name")?;
                let (input, _) = self.expect(input, "'='", |i| self.symbol(i, "="))?;
                let (input, operators) = self.list(input, BRACES, |i| {
                    self.expect(i, "an operator name", |i| self.operator_name(i))
                })?;
                Ok((input, Statement::DefineOpset { name, operators }))
            }
        }
    }

    /// A truth value, written as a keyword or a digit.
    fn truth_value(&self, input: &'s str) -> PResult<'s, TruthValue> {
        let (input, _) = self.trivia(input)?;
        if let Ok((rest, keyword)) = self.keyword(input, &["TRUE", "FALSE"]) {
            return Ok((rest, keyword == "TRUE"));
        }
        nom::branch::alt((
            value(true, |i| self.symbol(i, "1")),
            value(false, |i| self.symbol(i, "0")),
        ))(input)
    }

    /// The identifier of an operator in an opset, with built-in connectives spelt as keywords.
    fn operator_name(&self, input: &'s str) -> PResult<'s, String> {
        if let (rest, Some(keyword)) = opt(|i| self.keyword(i, &CONNECTIVES))(input)? {
            return Ok((rest, keyword.to_string()));
        }
        let (input, name) = self.identifier(input)?;
        Ok((input, name.to_string()))
    }

    fn operator(&self, input: &'s str) -> PResult<'s, CustomOperator> {
        let (input, name) = self.name(input, "an operator name")?;
        let (input, parameters) = self.list(input, PARENS, |i| self.name(i, "a parameter name"))?;
        let (input, _) = self.expect(input, "'='", |i| self.symbol(i, "="))?;
        let (input, entries) = self.list(input, BRACES, |i| self.table_entry(i))?;

        Ok((input, CustomOperator::new(name, parameters, TruthTable::new(entries))))
    }

    fn table_entry(&self, input: &'s str) -> PResult<'s, TruthTableEntry> {
        if let (rest, Some(_)) = opt(|i| self.keyword(i, &["OTHERWISE"]))(input)? {
            let (rest, _) = self.expect(rest, "'->'", |i| self.symbol(i, "->"))?;
            let (rest, value) = self.expect(rest, "a truth value", |i| self.truth_value(i))?;
            return Ok((rest, TruthTableEntry::Otherwise(value)));
        }

        let (input, _) = self.expect(input, "'(' or OTHERWISE", |i| self.symbol(i, "("))?;
        let (input, pattern) = match opt(|i| self.symbol(i, ")"))(input)? {
            (input, Some(_)) => (input, Vec::default()),
            (input, None) => {
                let (input, pattern) =
                    separated_list1(|i| self.symbol(i, ","), |i| self.cell(i))(input)?;
                let (input, _) = self.expect(input, "',' or ')'", |i| self.symbol(i, ")"))?;
                (input, pattern)
            }
        };
        let (input, _) = self.expect(input, "'->'", |i| self.symbol(i, "->"))?;
        let (input, value) = self.expect(input, "a truth value", |i| self.truth_value(i))?;

        Ok((input, TruthTableEntry::Pattern { pattern, value }))
    }

    /// A cell of a pattern, which is a truth value or the wildcard.
    fn cell(&self, input: &'s str) -> PResult<'s, PatternValue> {
        let (input, _) = self.trivia(input)?;
        if let Ok((rest, "_")) = word(input) {
            self.trace(input, format_args!("'_'"));
            return Ok((rest, PatternValue::Wildcard));
        }
        let (input, value) = self.expect(input, "a truth value or '_'", |i| self.truth_value(i))?;
        Ok((input, PatternValue::from(value)))
    }

    /// Parses an expression, at the loosest level of precedence.
    pub fn expression(&self, input: &'s str) -> PResult<'s, Expression> {
        let (input, (expression, depth)) = self.binary(input, 0)?;
        log::trace!(target: targets::PARSER, "Expression of depth {depth}");
        Ok((input, expression))
    }

    /// Some binary connective.
    fn binary_operator(&self, input: &'s str) -> PResult<'s, BinaryOperator> {
        let (input, _) = self.trivia(input)?;
        for (operator, symbols, keywords) in PRECEDENCE {
            if let (rest, Some(_)) = opt(|i| self.connective(i, symbols, keywords))(input)? {
                return Ok((rest, operator));
            }
        }
        Err(NomErr::Error(SyntaxError {
            input,
            kind: SyntaxErrorKind::Nom(nom::error::ErrorKind::Alt),
        }))
    }

    /// A chain of operands joined by binary connectives, grouped by precedence.
    fn binary(&self, input: &'s str, nesting: usize) -> PResult<'s, Operand> {
        let start = input;
        let (mut input, first) = self.unary(input, nesting)?;
        let mut operands = vec![first];
        let mut operators: Vec<BinaryOperator> = Vec::default();

        while let (rest, Some(operator)) = opt(|i| self.binary_operator(i))(input)? {
            while let Some(pending) = operators.last().copied() {
                let reduce = match binding(pending).cmp(&binding(operator)) {
                    Ordering::Greater => true,
                    Ordering::Equal => !right_associative(operator),
                    Ordering::Less => false,
                };
                if !reduce {
                    break;
                }
                operators.pop();
                reduce_top(&mut operands, pending);
            }

            let (rest, operand) = self.unary(rest, nesting)?;
            operators.push(operator);
            operands.push(operand);
            input = rest;
        }

        while let Some(operator) = operators.pop() {
            reduce_top(&mut operands, operator);
        }

        match operands.pop() {
            Some(operand) => Ok((input, self.bounded(start, operand)?)),
            None => Err(NomErr::Failure(SyntaxError {
                input: start,
                kind: SyntaxErrorKind::Expected("an expression"),
            })),
        }
    }

    fn unary(&self, input: &'s str, nesting: usize) -> PResult<'s, Operand> {
        let start = input;
        let mut input = input;
        let mut negations = 0;
        while let (rest, Some(_)) = opt(|i| self.connective(i, &["!", "~"], &["NOT"]))(input)? {
            negations += 1;
            input = rest;
        }
        if negations >= self.max_depth {
            return Err(self.too_deep(start));
        }

        let (input, (mut expression, depth)) = self.primary(input, nesting)?;
        for _ in 0..negations {
            expression = Expression::negation(expression);
        }
        Ok((input, self.bounded(start, (expression, depth + negations))?))
    }

    fn primary(&self, input: &'s str, nesting: usize) -> PResult<'s, Operand> {
        let (input, _) = self.trivia(input)?;

        if let (rest, Some(_)) = opt(|i| self.symbol(i, "("))(input)? {
            let nesting = self.nested(input, nesting)?;
            let (rest, operand) = self.binary(rest, nesting)?;
            let (rest, _) = self.expect(rest, "')'", |i| self.symbol(i, ")"))?;
            return Ok((rest, operand));
        }

        if let (rest, Some(_)) = opt(|i| self.symbol(i, "@"))(input)? {
            let (rest, name) = self.name(rest, "a formula name")?;
            return Ok((rest, (Expression::formula(name), 1)));
        }

        let (rest, name) = self.expect(input, "an expression", |i| self.identifier(i))?;
        match opt(|i| self.symbol(i, "("))(rest)? {
            (_, Some(_)) => {
                let nesting = self.nested(rest, nesting)?;
                let (rest, arguments) =
                    self.list(rest, PARENS, |i| self.binary(i, nesting))?;
                let depth = 1 + arguments.iter().map(|(_, d)| *d).max().unwrap_or(0);
                let arguments = arguments.into_iter().map(|(e, _)| e).collect();
                let operand = self.bounded(input, (Expression::apply(name, arguments), depth))?;
                Ok((rest, operand))
            }
            (_, None) => Ok((rest, (Expression::variable(name), 1))),
        }
    }

    /// The [ParseError] of some error from a parse of the source.
    pub fn parse_error(&self, error: NomErr<SyntaxError<'s>>) -> ParseError {
        let error = match error {
            NomErr::Error(e) | NomErr::Failure(e) => e,
            NomErr::Incomplete(_) => {
                return ParseError::UnexpectedEnd {
                    expected: "more input".to_string(),
                }
            }
        };

        if error.kind == SyntaxErrorKind::UnterminatedComment {
            let (line, column) = self.position(error.input);
            return ParseError::UnterminatedComment { line, column };
        }

        let input = match self.skip(error.input, false) {
            Ok((rest, _)) => rest,
            Err(_) => error.input,
        };
        let (line, column) = self.position(input);

        let expected = match error.kind {
            SyntaxErrorKind::TooDeep(limit) => {
                return ParseError::TooDeep {
                    line,
                    column,
                    limit,
                }
            }
            SyntaxErrorKind::Expected(expected) => expected,
            _ => "a statement",
        };

        match describe(input) {
            Ok(_) if input.is_empty() => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
            Ok(found) => ParseError::Unexpected {
                line,
                column,
                expected: expected.to_string(),
                found,
            },
            Err(lexeme) => ParseError::UnknownLexeme {
                line,
                column,
                lexeme,
            },
        }
    }
}

fn combine(operator: BinaryOperator, left: Operand, right: Operand) -> Operand {
    let depth = 1 + left.1.max(right.1);
    (Expression::binary(operator, left.0, right.0), depth)
}

/// Tighter connectives bind with a greater value.
fn binding(operator: BinaryOperator) -> usize {
    match operator {
        BinaryOperator::Iff => 1,
        BinaryOperator::Implies => 2,
        BinaryOperator::Or => 3,
        BinaryOperator::And => 4,
    }
}

fn right_associative(operator: BinaryOperator) -> bool {
    matches!(operator, BinaryOperator::Iff | BinaryOperator::Implies)
}

/// Replaces the top two operands with the operator applied to them.
fn reduce_top(operands: &mut Vec<Operand>, operator: BinaryOperator) {
    if let (Some(right), Some(left)) = (operands.pop(), operands.pop()) {
        operands.push(combine(operator, left, right));
    }
}
