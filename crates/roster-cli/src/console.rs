//! Interactive console session
//!
//! Presents the numbered menu, reads one line per prompt, turns the answers
//! into `Command`s and prints the outcome. Generic over the reader and writer
//! so a whole session can be scripted.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use roster_core::errors::ExError;
use roster_core::parse::{parse_id, parse_salary, parse_text};
use roster_core::render::{render_employee, render_roster};
use roster_core::{
    apply, log_op_end, log_op_error, log_op_start, Command, MenuChoice, Outcome, Roster,
    RosterError,
};
use roster_core_types::RequestContext;

const MENU: &str = "\nEmployee Management System\n\
1. Add Employee\n\
2. Display All Employees\n\
3. Search Employee\n\
4. Update Employee\n\
5. Delete Employee\n\
6. Exit\n";

const PROMPT_CHOICE: &str = "Enter your choice: ";
const PROMPT_ID: &str = "Enter Employee ID: ";
const PROMPT_NAME: &str = "Enter Name: ";
const PROMPT_SALARY: &str = "Enter Salary: $";
const PROMPT_DEPARTMENT: &str = "Enter Department: ";
const PROMPT_SEARCH_ID: &str = "Enter Employee ID to search: ";
const PROMPT_UPDATE_ID: &str = "Enter Employee ID to update: ";
const PROMPT_NEW_NAME: &str = "Enter new Name: ";
const PROMPT_NEW_SALARY: &str = "Enter new Salary: $";
const PROMPT_NEW_DEPARTMENT: &str = "Enter new Department: ";
const PROMPT_DELETE_ID: &str = "Enter Employee ID to delete: ";

const MSG_ADDED: &str = "Employee added successfully!";
const MSG_UPDATED: &str = "Employee updated successfully!";
const MSG_DELETED: &str = "Employee deleted successfully!";
const MSG_EMPTY: &str = "No employees to display!";
const MSG_NOT_FOUND: &str = "Employee not found!";
const MSG_INVALID_INPUT: &str = "Invalid input!";
const MSG_INVALID_CHOICE: &str = "Invalid choice!";
const MSG_EXITING: &str = "Exiting...";

/// Why an operation stopped before reaching the roster
enum Interrupt {
    /// An answer did not parse; the operation is abandoned
    Rejected(RosterError),
    /// Input ended
    Closed,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

enum Flow {
    Continue,
    Exit,
}

/// One console run: the roster lives exactly as long as the session
pub struct Session<R, W> {
    input: R,
    output: W,
    roster: Roster,
    ctx: RequestContext,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_context(input, output, RequestContext::new())
    }

    /// Session whose log events are correlated under `ctx`
    pub fn with_context(input: R, output: W, ctx: RequestContext) -> Self {
        Self {
            input,
            output,
            roster: Roster::new(),
            ctx,
        }
    }

    /// Run the menu loop until Exit is chosen or input ends
    ///
    /// # Errors
    ///
    /// Only I/O failures on the reader or writer end the session with an error.
    pub fn run(&mut self) -> Result<(), ExError> {
        let span = tracing::info_span!("session", request_id = %self.ctx.request_id);
        let _guard = span.enter();
        let started = Instant::now();

        log_op_start!("console_session");

        let result = self.menu_loop();
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(()) => {
                log_op_end!(
                    "console_session",
                    duration_ms = duration_ms,
                    roster_len = self.roster.len(),
                );
                Ok(())
            }
            Err(err) => {
                let ex_err = ExError::from(err)
                    .with_op("console_session")
                    .with_request_id(self.ctx.request_id.clone());
                log_op_error!("console_session", ex_err.clone(), duration_ms = duration_ms);
                Err(ex_err)
            }
        }
    }

    fn menu_loop(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(line) = self.prompt_number(PROMPT_CHOICE)? else {
                return Ok(());
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(err) => {
                    tracing::debug!(error = %err, "unparseable menu choice");
                    self.say(MSG_INVALID_CHOICE)?;
                    continue;
                }
            };

            let handled = match choice {
                MenuChoice::Add => self.add(),
                MenuChoice::DisplayAll => self.display_all(),
                MenuChoice::Search => self.search(),
                MenuChoice::Update => self.update(),
                MenuChoice::Delete => self.delete(),
                MenuChoice::Exit => {
                    self.output.write_all(MSG_EXITING.as_bytes())?;
                    self.output.flush()?;
                    Ok(Flow::Exit)
                }
                MenuChoice::Invalid(n) => {
                    tracing::debug!(choice = n, "menu choice out of range");
                    self.say(MSG_INVALID_CHOICE)?;
                    Ok(Flow::Continue)
                }
            };

            match handled {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(Interrupt::Closed) => return Ok(()),
                Err(Interrupt::Rejected(err)) => {
                    tracing::warn!(error = %err, "operation abandoned on bad input");
                    self.say(MSG_INVALID_INPUT)?;
                }
                Err(Interrupt::Io(err)) => return Err(err),
            }
        }
    }

    fn add(&mut self) -> Result<Flow, Interrupt> {
        let id = self.ask(PROMPT_ID, parse_id)?;
        let name = self.ask_text(PROMPT_NAME)?;
        let salary = self.ask(PROMPT_SALARY, parse_salary)?;
        let department = self.ask_text(PROMPT_DEPARTMENT)?;

        self.execute(Command::Add {
            id,
            name,
            salary,
            department,
        })
    }

    fn display_all(&mut self) -> Result<Flow, Interrupt> {
        self.execute(Command::ListAll)
    }

    fn search(&mut self) -> Result<Flow, Interrupt> {
        let id = self.ask(PROMPT_SEARCH_ID, parse_id)?;
        self.execute(Command::Find { id })
    }

    /// New values are only asked for once the id is known to exist
    fn update(&mut self) -> Result<Flow, Interrupt> {
        let id = self.ask(PROMPT_UPDATE_ID, parse_id)?;

        let (roster, found) = apply(std::mem::take(&mut self.roster), Command::Find { id });
        self.roster = roster;
        if let Err(err) = found {
            self.report(Err(err))?;
            return Ok(Flow::Continue);
        }

        let name = self.ask_text(PROMPT_NEW_NAME)?;
        let salary = self.ask(PROMPT_NEW_SALARY, parse_salary)?;
        let department = self.ask_text(PROMPT_NEW_DEPARTMENT)?;

        self.execute(Command::Update {
            id,
            name,
            salary,
            department,
        })
    }

    fn delete(&mut self) -> Result<Flow, Interrupt> {
        let id = self.ask(PROMPT_DELETE_ID, parse_id)?;
        self.execute(Command::Delete { id })
    }

    fn execute(&mut self, cmd: Command) -> Result<Flow, Interrupt> {
        let (roster, result) = apply(std::mem::take(&mut self.roster), cmd);
        self.roster = roster;
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn report(&mut self, result: roster_core::Result<Outcome>) -> io::Result<()> {
        match result {
            Ok(Outcome::Added(_)) => self.say(MSG_ADDED),
            Ok(Outcome::Listed(all)) => self.output.write_all(render_roster(&all).as_bytes()),
            Ok(Outcome::Found(employee)) => {
                self.output.write_all(render_employee(&employee).as_bytes())
            }
            Ok(Outcome::Updated(_)) => self.say(MSG_UPDATED),
            Ok(Outcome::Deleted { .. }) => self.say(MSG_DELETED),
            Err(RosterError::EmptyRoster) => self.say(MSG_EMPTY),
            Err(RosterError::EmployeeNotFound { .. }) => self.say(MSG_NOT_FOUND),
            Err(RosterError::InvalidInput { .. }) => self.say(MSG_INVALID_INPUT),
        }
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> roster_core::Result<T>,
    ) -> Result<T, Interrupt> {
        let line = self.prompt_number(prompt)?.ok_or(Interrupt::Closed)?;
        parse(&line).map_err(Interrupt::Rejected)
    }

    fn ask_text(&mut self, prompt: &str) -> Result<String, Interrupt> {
        let line = self.prompt(prompt)?.ok_or(Interrupt::Closed)?;
        Ok(parse_text(&line))
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Like `prompt`, but blank lines are skipped while waiting for a number
    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut answer = self.prompt(prompt)?;
        while let Some(line) = answer.as_deref() {
            if !line.trim().is_empty() {
                break;
            }
            answer = self.read_line()?;
        }
        Ok(answer)
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}
