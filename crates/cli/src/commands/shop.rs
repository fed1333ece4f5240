//! `sportshop shop` - the interactive shell.
//!
//! Without a stored profile the shopper is walked through registration
//! first; a blank name skips it and the catalog is shown unpersonalized.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use sportshop_core::{
    Brand, CartTotals, ProductId, RegistrationForm, SortMode, Sport, UnknownNameError,
    UnknownSortModeError,
};
use sportshop_storefront::views::{CartView, render_cart, render_product_list};
use sportshop_storefront::{KeyValueStore, RegisterError, Speaker, Storefront, StorefrontConfig};
use thiserror::Error;

const COMMANDS_HELP: &str = "\
Commands:
  list                      show matching products
  search <text>             filter by text (empty clears)
  sort <mode>               personalized | price-asc | price-desc | name-asc
  brand <name> on|off       select or deselect a brand
  sport <name> on|off       select or deselect a sport
  clear                     clear brand, sport and text filters
  add <id>                  add one to the cart
  inc <id> / dec <id>       change a cart quantity
  cart                      show the cart
  ask <request>             ask the assistant, e.g. ask find nike running shoes
  checkout                  check out (demo)
  stop                      stop speaking
  help                      show this list
  quit                      leave the shop";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Sort(SortMode),
    Brand(Brand, bool),
    Sport(Sport, bool),
    Clear,
    Add(ProductId),
    Inc(ProductId),
    Dec(ProductId),
    Cart,
    Ask(String),
    Checkout,
    Stop,
    Help,
    Quit,
}

/// Shell input that could not be understood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("type a command, or `help` for the list")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("expected on or off, got `{0}`")]
    InvalidSwitch(String),
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),
    #[error(transparent)]
    UnknownSort(#[from] UnknownSortModeError),
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(ParseError::MissingArgument(name))
            } else {
                Ok(rest)
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "list" | "ls" => Ok(Self::List),
            "search" => Ok(Self::Search(rest.to_string())),
            "sort" => Ok(Self::Sort(required("sort")?.parse()?)),
            "brand" => {
                let (name, on) = split_switch(required("brand")?)?;
                Ok(Self::Brand(name.parse()?, on))
            }
            "sport" => {
                let (name, on) = split_switch(required("sport")?)?;
                Ok(Self::Sport(name.parse()?, on))
            }
            "clear" => Ok(Self::Clear),
            "add" => Ok(Self::Add(ProductId::new(required("add")?))),
            "inc" => Ok(Self::Inc(ProductId::new(required("inc")?))),
            "dec" => Ok(Self::Dec(ProductId::new(required("dec")?))),
            "cart" => Ok(Self::Cart),
            "ask" => Ok(Self::Ask(required("ask")?.to_string())),
            "checkout" => Ok(Self::Checkout),
            "stop" => Ok(Self::Stop),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split `"<name> on|off"`; brand names may contain spaces.
fn split_switch(args: &str) -> Result<(&str, bool), ParseError> {
    let (name, switch) = args
        .rsplit_once(char::is_whitespace)
        .ok_or(ParseError::MissingArgument("on|off"))?;
    let on = match switch.to_ascii_lowercase().as_str() {
        "on" => true,
        "off" => false,
        _ => return Err(ParseError::InvalidSwitch(switch.to_string())),
    };
    Ok((name.trim(), on))
}

/// Whether the shell keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the shop on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the stored profile cannot be read, a registration
/// cannot be saved, or the terminal cannot be read or written.
pub async fn run(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut shop = super::open_storefront(config)?;
    let countries = if shop.profile().is_none() {
        super::country_list(config).await
    } else {
        Vec::new()
    };

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    if shop.profile().is_none() {
        register_interactively(&mut shop, &mut input, &mut out, &countries, super::today())?;
    }
    if let Some(profile) = shop.profile() {
        writeln!(out, "Welcome, {}.", profile.name)?;
    }
    writeln!(out, "{COMMANDS_HELP}")?;
    run_session(&mut shop, &mut input, &mut out)?;
    Ok(())
}

/// Prompt for registration until it succeeds or the shopper leaves the name
/// blank.
///
/// # Errors
///
/// Returns an error if the profile cannot be saved or the terminal fails.
pub fn register_interactively<S, V, R, W>(
    shop: &mut Storefront<S, V>,
    input: &mut R,
    out: &mut W,
    countries: &[String],
    today: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: KeyValueStore,
    V: Speaker,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to SportShop. Register to personalize your store.")?;
    writeln!(out, "Leave the name blank to browse without registering.")?;

    loop {
        let Some(form) = prompt_registration(input, out, countries)? else {
            tracing::info!("registration skipped");
            return Ok(());
        };
        match shop.register(&form, today) {
            Ok(profile) => {
                writeln!(out, "Thanks {}. Personalizing your store now.", profile.name)?;
                return Ok(());
            }
            Err(e @ RegisterError::Validation(_)) => writeln!(out, "{}", e.user_message())?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read one registration form. `None` when the name is left blank or input
/// ends.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn prompt_registration<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    countries: &[String],
) -> io::Result<Option<RegistrationForm>> {
    let Some(name) = ask(input, out, "Name")? else {
        return Ok(None);
    };
    if name.is_empty() {
        return Ok(None);
    }
    let dob = ask(input, out, "Date of birth (YYYY-MM-DD)")?.unwrap_or_default();

    if !countries.is_empty() {
        writeln!(out, "Countries: {}", countries.join(", "))?;
    }
    let country = ask(input, out, "Country")?.unwrap_or_default();
    let email = ask(input, out, "Email")?.unwrap_or_default();
    let phone = ask(input, out, "Phone")?.unwrap_or_default();

    let sport_names: Vec<&str> = Sport::ALL.iter().map(|s| s.as_str()).collect();
    writeln!(out, "Sports: {}", sport_names.join(", "))?;
    let sports = ask(input, out, "Favourite sports (comma-separated)")?.unwrap_or_default();

    let brand_names: Vec<&str> = Brand::ALL.iter().map(|b| b.as_str()).collect();
    writeln!(out, "Brands: {}", brand_names.join(", "))?;
    let brands = ask(input, out, "Favourite brands (comma-separated)")?.unwrap_or_default();

    Ok(Some(RegistrationForm {
        name,
        dob,
        country,
        email,
        phone,
        sports: split_list(&sports),
        brands: split_list(&brands),
    }))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Prompt and read one trimmed line; `None` at end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read commands until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run_session<S, V, R, W>(
    shop: &mut Storefront<S, V>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    S: KeyValueStore,
    V: Speaker,
    R: BufRead,
    W: Write,
{
    out.write_all(render_product_list(&shop.visible_products()).as_bytes())?;
    loop {
        let Some(line) = ask(input, out, "sportshop")? else {
            return Ok(());
        };
        match line.parse::<ShellCommand>() {
            Ok(command) => {
                if execute(shop, command, out)? == Flow::Quit {
                    return Ok(());
                }
            }
            Err(ParseError::Empty) => {}
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

/// Apply one command and print its result.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn execute<S, V, W>(
    shop: &mut Storefront<S, V>,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<Flow>
where
    S: KeyValueStore,
    V: Speaker,
    W: Write,
{
    let show_products = matches!(
        command,
        ShellCommand::List
            | ShellCommand::Search(_)
            | ShellCommand::Sort(_)
            | ShellCommand::Brand(..)
            | ShellCommand::Sport(..)
            | ShellCommand::Clear
    );

    match command {
        ShellCommand::List => {}
        ShellCommand::Search(text) => shop.set_query(text),
        ShellCommand::Sort(mode) => shop.set_sort_mode(mode),
        ShellCommand::Brand(brand, on) => shop.toggle_brand(brand, on),
        ShellCommand::Sport(sport, on) => shop.toggle_sport(sport, on),
        ShellCommand::Clear => shop.clear_filters(),
        ShellCommand::Add(id) => match shop.add_to_cart(&id) {
            Ok(totals) => write_totals(out, &totals)?,
            Err(e) => writeln!(out, "{e}")?,
        },
        ShellCommand::Inc(id) => write_totals(out, &shop.change_quantity(&id, 1))?,
        ShellCommand::Dec(id) => write_totals(out, &shop.change_quantity(&id, -1))?,
        ShellCommand::Cart => write_cart(shop, out)?,
        ShellCommand::Ask(request) => {
            let reply = shop.help(&request);
            writeln!(out, "{}", reply.text)?;
            if reply.open_cart {
                write_cart(shop, out)?;
            } else {
                out.write_all(render_product_list(&shop.visible_products()).as_bytes())?;
            }
        }
        ShellCommand::Checkout => writeln!(out, "{}", shop.checkout())?,
        ShellCommand::Stop => shop.stop_speaking(),
        ShellCommand::Help => writeln!(out, "{COMMANDS_HELP}")?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    if show_products {
        out.write_all(render_product_list(&shop.visible_products()).as_bytes())?;
    }
    Ok(Flow::Continue)
}

fn write_totals<W: Write>(out: &mut W, totals: &CartTotals) -> io::Result<()> {
    writeln!(
        out,
        "Cart: {} item(s), subtotal {}",
        totals.item_count,
        totals.subtotal.display()
    )
}

fn write_cart<S: KeyValueStore, V: Speaker, W: Write>(
    shop: &Storefront<S, V>,
    out: &mut W,
) -> io::Result<()> {
    out.write_all(render_cart(&CartView::from(shop.cart())).as_bytes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use sportshop_core::Catalog;
    use sportshop_storefront::{MemoryStore, SilentSpeaker};

    use super::*;

    fn shop() -> Storefront<MemoryStore, SilentSpeaker> {
        Storefront::open(Catalog::builtin(), MemoryStore::new(), SilentSpeaker).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn session_output(shop: &mut Storefront<MemoryStore, SilentSpeaker>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_session(shop, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("list".parse::<ShellCommand>().unwrap(), ShellCommand::List);
        assert_eq!(
            "  SEARCH  yoga mat ".parse::<ShellCommand>().unwrap(),
            ShellCommand::Search("yoga mat".to_string())
        );
        assert_eq!(
            "search".parse::<ShellCommand>().unwrap(),
            ShellCommand::Search(String::new())
        );
        assert_eq!(
            "sort price-desc".parse::<ShellCommand>().unwrap(),
            ShellCommand::Sort(SortMode::PriceDesc)
        );
        assert_eq!(
            "brand new balance on".parse::<ShellCommand>().unwrap(),
            ShellCommand::Brand(Brand::NewBalance, true)
        );
        assert_eq!(
            "sport tennis OFF".parse::<ShellCommand>().unwrap(),
            ShellCommand::Sport(Sport::Tennis, false)
        );
        assert_eq!(
            "add p3".parse::<ShellCommand>().unwrap(),
            ShellCommand::Add(ProductId::new("p3"))
        );
        assert_eq!(
            "ask find nike".parse::<ShellCommand>().unwrap(),
            ShellCommand::Ask("find nike".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ShellCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "dance".parse::<ShellCommand>(),
            Err(ParseError::UnknownCommand("dance".to_string()))
        );
        assert_eq!(
            "add".parse::<ShellCommand>(),
            Err(ParseError::MissingArgument("add"))
        );
        assert_eq!(
            "brand nike".parse::<ShellCommand>(),
            Err(ParseError::MissingArgument("on|off"))
        );
        assert_eq!(
            "brand nike maybe".parse::<ShellCommand>(),
            Err(ParseError::InvalidSwitch("maybe".to_string()))
        );
        assert!(matches!(
            "sport curling on".parse::<ShellCommand>(),
            Err(ParseError::UnknownName(_))
        ));
        assert!(matches!(
            "sort cheapest".parse::<ShellCommand>(),
            Err(ParseError::UnknownSort(_))
        ));
    }

    #[test]
    fn test_session_cart_flow() {
        let mut shop = shop();
        let output = session_output(&mut shop, "add p1\nadd p1\ndec p1\ncart\nquit\nadd p2\n");

        assert!(output.contains("Cart: 2 item(s), subtotal $299.98"));
        assert!(output.contains("Cart: 1 item(s), subtotal $149.99"));
        assert_eq!(shop.cart().total_item_count(), 1);
        assert_eq!(shop.cart().quantity_of(&ProductId::new("p2")), 0);
    }

    #[test]
    fn test_session_filters_and_errors() {
        let mut shop = shop();
        let output = session_output(&mut shop, "search nothing-like-this\nbogus\nadd p404\n");

        assert!(output.contains("No products match your filters."));
        assert!(output.contains("unknown command `bogus`"));
        assert!(output.contains("product not found: p404"));
        assert_eq!(shop.filters().query(), "nothing-like-this");
    }

    #[test]
    fn test_session_ask_and_checkout() {
        let mut shop = shop();
        let output = session_output(&mut shop, "ask find adidas yoga\nask open my cart\ncheckout\n");

        assert!(output.contains("Updated filters for: Adidas, Yoga."));
        assert!(output.contains("Adidas Yoga Mat"));
        assert!(output.contains("Opening your cart."));
        assert!(output.contains("Your cart is empty."));
        assert!(output.contains("Checkout is a demo in this build."));
    }

    #[test]
    fn test_prompt_registration_reads_all_fields() {
        let script = "Lee\n1998-02-03\nGermany\nlee@example.com\n+49 30 1234\nRunning, Tennis\nNike\n";
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let form = prompt_registration(&mut input, &mut out, &["Germany".to_string()])
            .unwrap()
            .unwrap();

        assert_eq!(form.name, "Lee");
        assert_eq!(form.country, "Germany");
        assert_eq!(form.sports, ["Running", "Tennis"]);
        assert_eq!(form.brands, ["Nike"]);
        assert!(String::from_utf8(out).unwrap().contains("Countries: Germany"));
    }

    #[test]
    fn test_blank_name_skips_registration() {
        let mut shop = shop();
        let mut input = Cursor::new(b"\n".to_vec());
        let mut out = Vec::new();
        register_interactively(&mut shop, &mut input, &mut out, &[], today()).unwrap();
        assert!(shop.profile().is_none());
    }

    #[test]
    fn test_rejected_registration_reprompts() {
        let mut shop = shop();
        let script = "Kid\n2020-01-01\nIndia\nkid@example.com\n123\n\n\n\
                      Kid\n2000-01-01\nIndia\nkid@example.com\n123\n\n\n";
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        register_interactively(&mut shop, &mut input, &mut out, &[], today()).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("You must be 13+ to register."));
        assert!(output.contains("Thanks Kid. Personalizing your store now."));
        assert_eq!(shop.profile().map(|p| p.name.as_str()), Some("Kid"));
    }
}
