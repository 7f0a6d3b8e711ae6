/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Dispatcher;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRequest,
    ProcessRequests,
    ShowFloor,
    ShowPending,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::AddRequest),
            "2" => Some(MenuChoice::ProcessRequests),
            "3" => Some(MenuChoice::ShowFloor),
            "4" => Some(MenuChoice::ShowPending),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum FloorInput {
    Floor(i32),
    Invalid,
    Closed,
}

/**
 * Interactive text menu around a `Dispatcher`.
 *
 * # Fields
 * - `input`:           Source of menu choices and floor numbers.
 * - `output`:          Where prompts and feedback are written.
 * - `dispatcher`:      The elevator being controlled.
 * - `render_done_rx`:  When set, processing waits here for the renderer to finish drawing.
 */
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    dispatcher: Dispatcher,
    render_done_rx: Option<cbc::Receiver<()>>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        input: R,
        output: W,
        dispatcher: Dispatcher,
        render_done_rx: Option<cbc::Receiver<()>>,
    ) -> Console<R, W> {
        Console {
            input,
            output,
            dispatcher,
            render_done_rx,
        }
    }

    /// Runs the menu until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let line = match self.prompt("Enter your choice (1-5): ")? {
                Some(line) => line,
                None => break,
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddRequest) => {
                    if !self.add_request()? {
                        break;
                    }
                }
                Some(MenuChoice::ProcessRequests) => self.process_requests()?,
                Some(MenuChoice::ShowFloor) => writeln!(
                    self.output,
                    "The elevator is currently at floor {}",
                    self.dispatcher.current_floor()
                )?,
                Some(MenuChoice::ShowPending) => self.show_pending()?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid choice. Please select a valid option.")?,
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Elevator Control Menu (This is an Elevator Simulation):")?;
        writeln!(self.output, "1. Add Elevator Request (Call the elevator)")?;
        writeln!(self.output, "2. Process Requests (Call this to make the elevator move)")?;
        writeln!(self.output, "3. Show Current Floor")?;
        writeln!(self.output, "4. Show Pending Requests")?;
        writeln!(self.output, "5. Exit")
    }

    // Ok(None) on end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    // Returns false when the input ended mid-request
    fn add_request(&mut self) -> io::Result<bool> {
        let user_floor = match self.read_floor("Enter your current floor: ")? {
            FloorInput::Floor(floor) => floor,
            FloorInput::Invalid => return Ok(true),
            FloorInput::Closed => return Ok(false),
        };
        let destination_floor = match self.read_floor("Enter your destination floor: ")? {
            FloorInput::Floor(floor) => floor,
            FloorInput::Invalid => return Ok(true),
            FloorInput::Closed => return Ok(false),
        };

        match self.dispatcher.call_elevator(user_floor, destination_floor) {
            Ok(trip) => writeln!(self.output, "Request queued: floor {}.", trip)?,
            Err(e) => {
                info!("Request rejected: {}", e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(true)
    }

    fn read_floor(&mut self, text: &str) -> io::Result<FloorInput> {
        let line = match self.prompt(text)? {
            Some(line) => line,
            None => return Ok(FloorInput::Closed),
        };

        match line.parse::<i32>() {
            Ok(floor) => Ok(FloorInput::Floor(floor)),
            Err(e) => {
                debug!("Rejected floor input {:?}: {}", line, e);
                writeln!(self.output, "Please enter a valid integer for the floor number.")?;
                Ok(FloorInput::Invalid)
            }
        }
    }

    fn process_requests(&mut self) -> io::Result<()> {
        let report = self.dispatcher.process_all();

        if let Some(render_done_rx) = &self.render_done_rx {
            // Only fails if the renderer thread is gone, in which case there is nothing to wait for
            let _ = render_done_rx.recv();
        }

        writeln!(
            self.output,
            "Served {} request(s). The elevator is at floor {}.",
            report.served.len(),
            report.final_floor
        )
    }

    fn show_pending(&mut self) -> io::Result<()> {
        let pending = self.dispatcher.pending();
        if pending.is_empty() {
            return writeln!(self.output, "No pending requests.");
        }

        let up = pending.up.sorted();
        let down = pending.down.sorted();
        for (name, trips) in [("Up", up), ("Down", down)] {
            let listed: Vec<String> = trips.iter().map(|t| t.to_string()).collect();
            writeln!(self.output, "{} queue: [{}]", name, listed.join(", "))?;
        }

        // Up trips are always served first
        if let Some(next) = pending.up.peek_min().or_else(|| pending.down.peek_min()) {
            writeln!(self.output, "Next trip: {}", next)?;
        }
        Ok(())
    }
}
