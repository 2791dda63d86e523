use std::{collections::HashSet, io::BufRead};

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Information about a problem read to a context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// A count of premise lines read.
    pub premises: usize,

    /// A count of literals in the goal.
    pub goal_literals: usize,

    /// A count of clauses added to the clause database, after admission.
    pub added_clauses: usize,

    /// A count of distinct atoms in the premises and goal read.
    pub atoms: usize,
}

impl Context {
    /// The literal with the given external representation.
    ///
    /// A literal is an atom, optionally prefixed by the negation marker.
    /// An atom is a non-empty string of non-whitespace characters which does not contain the negation marker.
    ///
    /// ```rust
    /// # use resolvent::context::Context;
    /// # use resolvent::config::Config;
    /// # use resolvent::structures::literal::Literal;
    /// let mut ctx = Context::from_config(Config::default());
    ///
    /// let p = ctx.literal_from_string("p").unwrap();
    /// let not_p = ctx.literal_from_string("~p").unwrap();
    /// assert_eq!(p, -not_p);
    ///
    /// assert!(ctx.literal_from_string("~").is_err());
    /// assert!(ctx.literal_from_string("~~p").is_err());
    /// assert!(ctx.literal_from_string("p~q").is_err());
    /// ```
    pub fn literal_from_string(&mut self, string: &str) -> Result<CLiteral, err::ErrorKind> {
        self.literal_on_line(string, 1)
    }

    /// The clause with the given external representation, as a sequence of literals separated by whitespace.
    ///
    /// Literals are kept in order, with any repetition.
    pub fn clause_from_string(&mut self, string: &str) -> Result<CClause, err::ErrorKind> {
        self.clause_on_line(string, 1)
    }

    /// Reads a problem into the context.
    ///
    /// Each line of a problem is a clause, with literals separated by whitespace.
    /// The last line is the goal, and every other line is a premise.
    /// Blank lines at the end of the problem are ignored.
    ///
    /// Every line is read before any clause is added to the context, and so on error the clause database is unchanged.
    /// Atoms named before the error remain in the atom database.
    ///
    /// ```rust
    /// # use resolvent::context::Context;
    /// # use resolvent::config::Config;
    /// # use resolvent::types::err::{ErrorKind, ParseError};
    /// let mut ctx = Context::from_config(Config::default());
    ///
    /// let info = ctx.read_problem("A B\n~A\nB\n".as_bytes()).unwrap();
    /// assert_eq!(info.premises, 2);
    /// assert_eq!(info.goal_literals, 1);
    /// assert_eq!(info.added_clauses, 3);
    /// assert_eq!(info.atoms, 2);
    ///
    /// let mut ctx = Context::from_config(Config::default());
    /// assert_eq!(ctx.read_problem("".as_bytes()), Err(ErrorKind::Parse(ParseError::EmptyGoal)));
    /// ```
    pub fn read_problem(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut lines: Vec<(usize, String)> = Vec::default();
        let mut line_counter = 0;

        loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            lines.push((line_counter, std::mem::take(&mut buffer)));
        }

        while lines.last().is_some_and(|(_, line)| line.trim().is_empty()) {
            lines.pop();
        }

        let Some((goal_line, goal_string)) = lines.pop() else {
            return Err(err::ParseError::EmptyGoal.into());
        };

        let mut premises = Vec::with_capacity(lines.len());
        for (line, string) in &lines {
            premises.push(self.clause_on_line(string, *line)?);
        }
        let goal = self.clause_on_line(&goal_string, goal_line)?;

        let atoms: HashSet<_> = premises
            .iter()
            .chain(std::iter::once(&goal))
            .flat_map(|clause| clause.atoms())
            .collect();

        let mut info = ParserInfo {
            premises: premises.len(),
            goal_literals: goal.len(),
            atoms: atoms.len(),
            ..Default::default()
        };

        log::info!(target: targets::PARSE, "Read {} premises and a goal of {} literals", info.premises, info.goal_literals);

        info.added_clauses = self.ingest(premises, goal)?;

        Ok(info)
    }

    fn literal_on_line(&mut self, token: &str, line: usize) -> Result<CLiteral, err::ErrorKind> {
        let marker = self.config.negation_marker;
        let (name, polarity) = match token.strip_prefix(marker) {
            Some(name) => (name, false),
            None => (token, true),
        };

        if name.is_empty() || name.contains(marker) || name.contains(char::is_whitespace) {
            log::warn!(target: targets::PARSE, "Malformed literal on line {line}: {token}");
            return Err(err::ParseError::MalformedLiteral {
                line,
                token: token.to_owned(),
            }
            .into());
        }

        let atom = self.atom_db.atom_for(name)?;
        Ok(CLiteral::new(atom, polarity))
    }

    fn clause_on_line(&mut self, string: &str, line: usize) -> Result<CClause, err::ErrorKind> {
        let mut clause = CClause::default();
        for token in string.split_whitespace() {
            clause.push(self.literal_on_line(token, line)?);
        }

        match clause.is_empty() {
            true => Err(err::ParseError::EmptyClause { line }.into()),
            false => Ok(clause),
        }
    }
}
