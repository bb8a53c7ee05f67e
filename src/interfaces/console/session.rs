use super::command::Command;
use crate::application::machine::{Selection, VendingMachine};
use crate::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

const PURCHASED: &str = "Purchased!";
const NOT_PURCHASED: &str = "Not purchased! Maybe not enough money, or bad code, or out of stock!";
const NOT_RECOGNIZED: &str = "Input not recognized as money or snack selection. Ignoring.";

/// Drives a [`VendingMachine`] from line-based keypad input.
///
/// Each line is handled to completion, including its output, before the next
/// one is read. The session ends when the input does.
pub struct Session<W: AsyncWrite + Unpin> {
    machine: VendingMachine,
    out: W,
}

impl<W: AsyncWrite + Unpin> Session<W> {
    pub fn new(machine: VendingMachine, out: W) -> Self {
        Self { machine, out }
    }

    /// Announces the machine and the commands it accepts, then lists the products.
    pub async fn turn_on(&mut self) -> Result<()> {
        self.say("Vending machine turned on.").await?;
        self.say("At any time, you may add change (Penny, Nickel, Dime, Quarter),")
            .await?;
        self.say("make a snack selection to purchase,").await?;
        self.say("or get your money back by typing 'Return'").await?;
        self.list_products().await
    }

    /// Processes every line of `input`.
    pub async fn listen<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            self.handle(&line).await?;
        }
        info!(
            revenue = %self.machine.revenue(),
            balance = %self.machine.balance(),
            "input closed"
        );
        Ok(())
    }

    pub async fn handle(&mut self, line: &str) -> Result<()> {
        match Command::parse(line) {
            Command::Insert(coin) => {
                let balance = self.machine.insert_coin(coin)?;
                self.say(balance.to_string()).await?;
            }
            Command::Select(code) => match self.machine.select(&code)? {
                Selection::Purchased { change, .. } => {
                    let balance = self.machine.balance();
                    self.say(PURCHASED).await?;
                    self.say(change).await?;
                    self.say(balance.to_string()).await?;
                }
                Selection::Rejected => {
                    let balance = self.machine.balance();
                    self.say(NOT_PURCHASED).await?;
                    self.say(balance.to_string()).await?;
                }
            },
            Command::Return => {
                let message = self.machine.refund();
                self.say(message).await?;
            }
            Command::Products => self.list_products().await?,
            Command::Unrecognized(input) => {
                warn!(input = %input, "unrecognized input");
                self.say(NOT_RECOGNIZED).await?;
            }
        }
        self.out.flush().await?;
        Ok(())
    }

    pub fn into_machine(self) -> VendingMachine {
        self.machine
    }

    async fn list_products(&mut self) -> Result<()> {
        let mut listing = String::from("Products carried at this machine:\n");
        for slot in self.machine.catalog().slots() {
            listing.push_str(&format!(
                "{}\t{}\t{}\n",
                slot.code(),
                slot.product().name(),
                slot.product().price()
            ));
        }
        self.out.write_all(listing.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        self.out.write_all(line.as_ref().as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        Ok(())
    }
}
