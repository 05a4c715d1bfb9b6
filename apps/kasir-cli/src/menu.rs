//! # Menu Loop
//!
//! ## Screens
//! ```text
//! ┌──────────────────────┐   login ok    ┌──────────────────────────────┐
//! │  Main Menu           │ ────────────► │  Role Menu                   │
//! │  1. Login            │               │  1. View products            │
//! │  2. Exit             │ ◄──────────── │  2. Add stock | Add to cart  │
//! └──────────────────────┘   5. Log out  │  3. View cart (buyer)        │
//!            │                           │  4. Pay (buyer)              │
//!            ▼                           │  5. Log out                  │
//!          exit                          └──────────────────────────────┘
//! ```
//!
//! Every role-menu choice maps to an [`Operation`] and goes through the
//! role gate before anything is prompted. A rejected or failed action
//! prints one message and the menu comes back; only end of input or a
//! broken terminal ends the loop.

use std::io::{self, BufRead, Write};

use kasir_core::validation::{parse_amount, parse_quantity};
use kasir_core::{Operation, Role, Settlement};
use tracing::debug;

use crate::commands::{self, auth, cart, product, sale};
use crate::console::Console;
use crate::error::UiError;
use crate::render;
use crate::state::{AppState, ConfigState};

const INVALID_OPTION: &str = "Invalid option. Please try again.";
const PROMPT: &str = "Choose an option: ";

/// Whether the loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A choice typed at the role menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Logout,
    Invalid,
}

impl MenuChoice {
    /// Option `2` means restock for an admin and add-to-cart for a buyer.
    /// Options `3` and `4` parse for both roles; the gate rejects them for
    /// an admin.
    pub fn parse(role: Role, input: &str) -> Self {
        match (input.trim(), role) {
            ("1", _) => MenuChoice::Run(Operation::ViewCatalog),
            ("2", Role::Admin) => MenuChoice::Run(Operation::Restock),
            ("2", Role::Buyer) => MenuChoice::Run(Operation::AddToCart),
            ("3", _) => MenuChoice::Run(Operation::ViewCart),
            ("4", _) => MenuChoice::Run(Operation::Checkout),
            ("5", _) => MenuChoice::Logout,
            _ => MenuChoice::Invalid,
        }
    }
}

/// What cut an action short.
enum Interrupt {
    /// Reported to the user; the menu continues.
    Ui(UiError),
    /// Input ended mid-action.
    Eof,
    Io(io::Error),
}

impl From<UiError> for Interrupt {
    fn from(err: UiError) -> Self {
        Interrupt::Ui(err)
    }
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

/// Runs menus until the user exits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let flow = match state.store.current_account().map(|a| a.role()) {
            None => main_menu(state, console)?,
            Some(role) => role_menu(state, console, role)?,
        };
        if flow == Flow::Quit {
            debug!("Session ended");
            return Ok(());
        }
    }
}

fn main_menu<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.say("\n--- Main Menu ---")?;
    console.say("1. Login")?;
    console.say("2. Exit")?;

    let Some(choice) = console.prompt(PROMPT)? else {
        return Ok(Flow::Quit);
    };

    match choice.trim() {
        "1" => finish(state, console, login),
        "2" => {
            console.say("Thank you for using this program!")?;
            Ok(Flow::Quit)
        }
        _ => {
            console.say(INVALID_OPTION)?;
            Ok(Flow::Continue)
        }
    }
}

fn role_menu<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
    role: Role,
) -> io::Result<Flow> {
    console.say(format_args!("\n--- Welcome to {} ---", state.config.store_name))?;
    console.say("1. View products")?;
    match role {
        Role::Admin => console.say("2. Add product stock")?,
        Role::Buyer => {
            console.say("2. Add to cart")?;
            console.say("3. View cart and total")?;
            console.say("4. Pay")?;
        }
    }
    console.say("5. Log out")?;

    let Some(input) = console.prompt(PROMPT)? else {
        return Ok(Flow::Quit);
    };

    let choice = MenuChoice::parse(role, &input);
    debug!(%role, ?choice, "Menu choice");

    match choice {
        MenuChoice::Run(operation) => finish(state, console, |state, console| match operation {
            Operation::ViewCatalog => view_products(state, console),
            Operation::Restock => add_stock(state, console),
            Operation::AddToCart => add_to_cart(state, console),
            Operation::ViewCart => view_cart(state, console),
            Operation::Checkout => pay(state, console),
        }),
        MenuChoice::Logout => {
            auth::logout(&mut state.store);
            console.say("You have logged out.")?;
            Ok(Flow::Continue)
        }
        MenuChoice::Invalid => {
            console.say(INVALID_OPTION)?;
            Ok(Flow::Continue)
        }
    }
}

/// Runs one action and turns its interruption, if any, into a [`Flow`].
fn finish<R, W, F>(state: &mut AppState, console: &mut Console<R, W>, action: F) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&mut AppState, &mut Console<R, W>) -> Result<(), Interrupt>,
{
    match action(state, console) {
        Ok(()) => Ok(Flow::Continue),
        Err(Interrupt::Ui(err)) => {
            report(&state.config, console, &err)?;
            Ok(Flow::Continue)
        }
        Err(Interrupt::Eof) => Ok(Flow::Quit),
        Err(Interrupt::Io(err)) => Err(err),
    }
}

fn report<R: BufRead, W: Write>(
    config: &ConfigState,
    console: &mut Console<R, W>,
    err: &UiError,
) -> io::Result<()> {
    console.say(render::error(config, err))
}

fn ask<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str) -> Result<String, Interrupt> {
    console.prompt(label)?.ok_or(Interrupt::Eof)
}

// =============================================================================
// Actions
// =============================================================================

fn login<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), Interrupt> {
    console.say("\n--- Login ---")?;
    let username = ask(console, "Username: ")?;
    let password = ask(console, "Password: ")?;

    let role = auth::login(&mut state.store, &username, &password)?;
    console.say(format_args!("Logged in as {role}."))?;
    Ok(())
}

fn view_products<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), Interrupt> {
    let entries = product::list_products(&state.store)?;
    let rendered = render::catalog(&state.config, entries)?;

    console.say(format_args!("\n--- {} Products ---", state.config.store_name))?;
    console.say(rendered)?;
    Ok(())
}

fn add_stock<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), Interrupt> {
    commands::ensure_allowed(&state.store, Operation::Restock)?;

    let name = ask(console, "Product name to restock: ")?;
    product::find_product(&state.store, &name)?;

    let input = ask(console, "Quantity to add: ")?;
    let quantity = parse_quantity(&input).map_err(|e| commands::rejected("add_stock", e))?;

    let restocked = product::add_stock(&mut state.store, &name, quantity)?;
    console.say(render::restocked(&state.config, &restocked)?)?;
    Ok(())
}

fn add_to_cart<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), Interrupt> {
    commands::ensure_allowed(&state.store, Operation::AddToCart)?;
    view_products(state, console)?;

    let name = ask(console, "Product name to buy: ")?;
    product::find_product(&state.store, &name)?;

    let input = ask(console, "Quantity to buy: ")?;
    let quantity = parse_quantity(&input).map_err(|e| commands::rejected("add_to_cart", e))?;

    let addition = cart::add_to_cart(&mut state.store, &name, quantity)?;
    console.say(render::added_to_cart(&state.config, &addition)?)?;
    Ok(())
}

fn view_cart<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), Interrupt> {
    let summary = cart::get_cart(&state.store)?;

    console.say("\n--- Cart ---")?;
    console.say(render::cart(&state.config, &summary)?)?;
    Ok(())
}

fn pay<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), Interrupt> {
    let checkout = sale::begin_checkout(&mut state.store)?;

    console.say("\n--- Cart ---")?;
    console.say(render::cart(&state.config, &checkout.summary())?)?;

    let input = ask(console, "Amount paid: ")?;
    let amount = parse_amount(&input).map_err(|e| commands::rejected("pay", e))?;

    match sale::pay(checkout, amount)? {
        Settlement::Settled(receipt) => console.say(render::receipt(&state.config, &receipt)?)?,
        Settlement::Aborted(shortfall) => {
            console.say(render::shortfall(&state.config, &shortfall)?)?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_choices() {
        assert_eq!(
            MenuChoice::parse(Role::Admin, "1"),
            MenuChoice::Run(Operation::ViewCatalog)
        );
        assert_eq!(
            MenuChoice::parse(Role::Admin, "2"),
            MenuChoice::Run(Operation::Restock)
        );
        assert_eq!(
            MenuChoice::parse(Role::Admin, "3"),
            MenuChoice::Run(Operation::ViewCart)
        );
        assert_eq!(MenuChoice::parse(Role::Admin, "5"), MenuChoice::Logout);
    }

    #[test]
    fn test_parse_buyer_choices() {
        assert_eq!(
            MenuChoice::parse(Role::Buyer, "2"),
            MenuChoice::Run(Operation::AddToCart)
        );
        assert_eq!(
            MenuChoice::parse(Role::Buyer, " 4 "),
            MenuChoice::Run(Operation::Checkout)
        );
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "0", "6", "satu", "1 2"] {
            assert_eq!(MenuChoice::parse(Role::Buyer, input), MenuChoice::Invalid);
        }
    }
}
