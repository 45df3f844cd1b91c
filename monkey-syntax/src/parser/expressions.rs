use crate::ast::{BlockStatement, Expression, Identifier};
use crate::lexer::Token;
use crate::parser::statements::parse_statement;
use crate::parser::{ParseError, Parser};

#[derive(PartialOrd, PartialEq, Debug)]
pub enum Precedence {
    Lowest = 0,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

pub fn precedence_of(token: &Token) -> Precedence {
    match token {
        Token::Equal => Precedence::Equals,
        Token::NotEqual => Precedence::Equals,
        Token::LessThan => Precedence::LessGreater,
        Token::GreaterThan => Precedence::LessGreater,
        Token::Plus => Precedence::Sum,
        Token::Minus => Precedence::Sum,
        Token::Asterisk => Precedence::Product,
        Token::Slash => Precedence::Product,
        Token::LParen => Precedence::Call,
        Token::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

pub fn parse_expression(
    parser: &mut Parser,
    precedence: Precedence,
) -> Result<Expression, ParseError> {
    let Some(token) = parser.iter.next() else {
        return Err(ParseError::NoPrefixFunction(None));
    };
    let mut left_expression = prefix_parsing(token, parser)?;

    loop {
        let Some(next_token) = parser.iter.peek() else {
            break;
        };

        if *next_token == Token::SemiColon {
            break;
        }
        let next_precedence = precedence_of(next_token);
        if precedence >= next_precedence {
            break;
        }

        let Some(next_token) = parser.iter.next() else {
            break;
        };
        let Some(infix_parse_function) = infix_parsing_function(next_token) else {
            break;
        };
        left_expression = infix_parse_function(left_expression, parser)?;
    }

    Ok(left_expression)
}

pub fn prefix_parsing(token: Token, parser: &mut Parser) -> Result<Expression, ParseError> {
    match token {
        Token::Ident(name) => Ok(Expression::Identifier(Identifier { name: name.into() })),
        Token::Int(literal) => match literal.parse() {
            Ok(value) => Ok(Expression::IntegerLiteral(value)),
            Err(_) => Err(ParseError::InvalidInteger(literal.into())),
        },
        Token::String(value) => Ok(Expression::StringLiteral(value)),
        Token::True => Ok(Expression::BooleanLiteral(true)),
        Token::False => Ok(Expression::BooleanLiteral(false)),
        Token::Bang => prefix_operation(crate::ast::PrefixOperationKind::Bang, parser),
        Token::Minus => prefix_operation(crate::ast::PrefixOperationKind::Minus, parser),
        Token::LParen => parse_grouped_expression(parser),
        Token::LBracket => parse_array_literal(parser),
        Token::LBrace => parse_hash_literal(parser),
        Token::If => parse_if_expression(parser),
        Token::Function => parse_function_literal(parser),
        other => Err(ParseError::NoPrefixFunction(Some(other))),
    }
}

fn prefix_operation(
    kind: crate::ast::PrefixOperationKind,
    parser: &mut Parser,
) -> Result<Expression, ParseError> {
    Ok(Expression::PrefixOperation(
        kind,
        Box::new(parse_expression(parser, Precedence::Prefix)?),
    ))
}

fn parse_grouped_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let expression = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_token(Token::RParen)?;

    Ok(expression)
}

fn parse_sequence<T>(
    parser: &mut Parser,
    parse_element: impl Fn(&mut Parser) -> Result<T, ParseError>,
    separator: Token,
    terminator: Token,
) -> Result<Vec<T>, ParseError> {
    let mut elements = Vec::new();

    loop {
        match parser.iter.peek() {
            Some(next) if *next == terminator => {
                parser.iter.next();
                return Ok(elements);
            }
            None => return Err(ParseError::unexpected_token(terminator, None)),
            _ => {
                elements.push(parse_element(parser)?);
            }
        }

        match parser.iter.next() {
            Some(next) if next == separator => continue,
            Some(next) if next == terminator => return Ok(elements),
            next => return Err(ParseError::unexpected_token(separator, next)),
        }
    }
}

fn parse_array_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let expressions = parse_sequence(
        parser,
        |parser| parse_expression(parser, Precedence::Lowest),
        Token::Comma,
        Token::RBracket,
    )?;
    Ok(Expression::ArrayLiteral(expressions))
}

fn parse_hash_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let pairs = parse_sequence(
        parser,
        |parser| {
            let key = parse_expression(parser, Precedence::Lowest)?;
            parser.expect_token(Token::Colon)?;
            let value = parse_expression(parser, Precedence::Lowest)?;
            Ok((key, value))
        },
        Token::Comma,
        Token::RBrace,
    )?;
    Ok(Expression::HashLiteral(pairs))
}

fn parse_if_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.expect_token(Token::LParen)?;
    let condition = Box::new(parse_expression(parser, Precedence::Lowest)?);
    parser.expect_token(Token::RParen)?;

    parser.expect_token(Token::LBrace)?;
    let consequence = parse_block_statement(parser)?;

    let alternative = if parser
        .iter
        .next_if(|token| *token == Token::Else)
        .is_some()
    {
        parser.expect_token(Token::LBrace)?;
        Some(parse_block_statement(parser)?)
    } else {
        None
    };

    Ok(Expression::IfExpression {
        condition,
        consequence,
        alternative,
    })
}

// Statements inside a block follow each other directly; a semicolon after a
// statement is consumed when present but never required.
fn parse_block_statement(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    let mut statements = Vec::new();

    loop {
        match parser.iter.peek() {
            Some(Token::RBrace) => {
                parser.iter.next();
                return Ok(BlockStatement { statements });
            }
            None => return Err(ParseError::unexpected_token(Token::RBrace, None)),
            Some(_) => {
                statements.push(parse_statement(parser)?);
                parser.iter.next_if(|token| *token == Token::SemiColon);
            }
        }
    }
}

fn parse_function_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.expect_token(Token::LParen)?;
    let parameters = parse_parameters(parser)?;

    parser.expect_token(Token::LBrace)?;
    let body = parse_block_statement(parser)?;

    Ok(Expression::FunctionLiteral { parameters, body })
}

fn parse_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, ParseError> {
    parse_sequence(
        parser,
        |parser| parser.parse_ident().map(|name| Identifier { name }),
        Token::Comma,
        Token::RParen,
    )
}

type InfixFunction = Box<dyn FnOnce(Expression, &mut Parser) -> Result<Expression, ParseError>>;

fn infix_operation(token: Token, kind: crate::ast::InfixOperationKind) -> InfixFunction {
    Box::new(
        move |left: Expression, parser: &mut Parser| -> Result<Expression, ParseError> {
            let new_precedence = precedence_of(&token);

            Ok(Expression::InfixOperation(
                kind,
                Box::new(left),
                Box::new(parse_expression(parser, new_precedence)?),
            ))
        },
    )
}

fn parse_call_expression(left: Expression, parser: &mut Parser) -> Result<Expression, ParseError> {
    let arguments = parse_sequence(
        parser,
        |parser| parse_expression(parser, Precedence::Lowest),
        Token::Comma,
        Token::RParen,
    )?;

    Ok(Expression::CallExpression {
        function: Box::new(left),
        arguments,
    })
}

fn parse_index_expression(left: Expression, parser: &mut Parser) -> Result<Expression, ParseError> {
    let index = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_token(Token::RBracket)?;

    Ok(Expression::IndexExpression {
        left: Box::new(left),
        index: Box::new(index),
    })
}

pub fn infix_parsing_function(token: Token) -> Option<InfixFunction> {
    use crate::ast::InfixOperationKind as InfixKind;

    match token {
        Token::Plus => Some(infix_operation(Token::Plus, InfixKind::Plus)),
        Token::Minus => Some(infix_operation(Token::Minus, InfixKind::Minus)),
        Token::LessThan => Some(infix_operation(Token::LessThan, InfixKind::LessThan)),
        Token::GreaterThan => Some(infix_operation(Token::GreaterThan, InfixKind::GreaterThan)),
        Token::Equal => Some(infix_operation(Token::Equal, InfixKind::Equal)),
        Token::NotEqual => Some(infix_operation(Token::NotEqual, InfixKind::NotEqual)),
        Token::Asterisk => Some(infix_operation(Token::Asterisk, InfixKind::Multiply)),
        Token::Slash => Some(infix_operation(Token::Slash, InfixKind::Divide)),
        Token::LParen => Some(Box::new(parse_call_expression)),
        Token::LBracket => Some(Box::new(parse_index_expression)),
        _ => None,
    }
}
