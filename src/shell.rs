//! Interactive Shell
//!
//! Numbered menu loop over an [`Engine`]. Reads trimmed lines from any
//! `BufRead` and writes prompts and tables to any `Write`, so it can be
//! driven from a terminal or from a test.
//!
//! End of input behaves like choosing Exit.

use std::io::{BufRead, Write};

use crate::engine::Engine;
use crate::error::{Result, StockError};
use crate::present::render_table;
use crate::store::ItemUpdate;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Update,
    View,
    Search,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::View),
            "5" => Some(MenuChoice::Search),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu session
pub struct Shell<'e, R, W> {
    engine: &'e mut Engine,
    input: R,
    output: W,
}

impl<'e, R: BufRead, W: Write> Shell<'e, R, W> {
    pub fn new(engine: &'e mut Engine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or end of input.
    ///
    /// Operation failures are printed and the loop continues; only I/O
    /// errors on the shell's own input/output end the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an action (1-6): ")? else {
                writeln!(self.output)?;
                break;
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Remove) => self.remove()?,
                Some(MenuChoice::Update) => self.update()?,
                Some(MenuChoice::View) => self.view()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Inventory ===")?;
        writeln!(self.output, "1. Add item")?;
        writeln!(self.output, "2. Remove item")?;
        writeln!(self.output, "3. Update item")?;
        writeln!(self.output, "4. View inventory")?;
        writeln!(self.output, "5. Search items")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Item ID: ")? else {
            return Ok(Flow::Exit);
        };
        if self.engine.inventory().contains(&id) {
            self.report_error(&StockError::Duplicate(id))?;
            return Ok(Flow::Continue);
        }
        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt("Quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("Unit price: ")? else {
            return Ok(Flow::Exit);
        };

        match self.engine.add(&id, &name, &quantity, &price) {
            Ok(_) => writeln!(self.output, "Item added.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("ID of the item to remove: ")? else {
            return Ok(Flow::Exit);
        };
        match self.engine.remove(&id) {
            Ok(_) => writeln!(self.output, "Item removed.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("ID of the item to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(current) = self.engine.inventory().get(&id).cloned() else {
            self.report_error(&StockError::NotFound(id))?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Leave a field blank to keep its current value.")?;
        let Some(name) = self.prompt(&format!("New name (current: {}): ", current.name()))? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt(&format!("New quantity (current: {}): ", current.quantity()))? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt(&format!("New price (current: {}): ", current.unit_price()))? else {
            return Ok(Flow::Exit);
        };

        let changes = ItemUpdate {
            name: Some(name),
            quantity: Some(quantity),
            price: Some(price),
        };
        match self.engine.update(&id, &changes) {
            Ok(report) => {
                for warning in &report.warnings {
                    writeln!(self.output, "Warning: {}", warning)?;
                }
                writeln!(self.output, "Item updated.")?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> Result<Flow> {
        let items = self.engine.list();
        if items.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
        } else {
            let table = render_table(items);
            write!(self.output, "{}", table)?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("ID or name to search for: ")? else {
            return Ok(Flow::Exit);
        };
        let results = self.engine.search(&query);
        if results.is_empty() {
            writeln!(self.output, "No items found.")?;
        } else {
            let count = results.len();
            let table = render_table(results);
            writeln!(self.output, "Found {} item(s):", count)?;
            write!(self.output, "{}", table)?;
        }
        Ok(Flow::Continue)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report_error(&mut self, err: &StockError) -> Result<()> {
        match err {
            StockError::Duplicate(_) => writeln!(self.output, "An item with this ID already exists.")?,
            StockError::NotFound(_) => writeln!(self.output, "No item with this ID was found.")?,
            StockError::Validation(msg) => writeln!(self.output, "Invalid input: {}", msg)?,
            other => writeln!(self.output, "Error: {}", other)?,
        }
        Ok(())
    }
}
