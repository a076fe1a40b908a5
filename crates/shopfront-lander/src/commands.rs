//! Command parsing
//!
//! Turns the text typed after `:` into a [`Command`]. Parsing only checks
//! shape; whether an item id or cart line exists is decided against the store
//! when the command runs.

use std::str::FromStr;

use shopfront_core::domain_models::{CartLineKey, CategoryFilter, Page, SortOrder, TopLevelView};
use thiserror::Error;

/// Errors shown to the user instead of dispatching anything
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Too many arguments for '{0}'")]
    TooManyArguments(&'static str),

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("'{value}' is not a valid {what}")]
    InvalidValue { what: &'static str, value: String },

    #[error("Cart lines are numbered from 1")]
    ZeroLine,

    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    #[error("Your cart has no {0}")]
    NotInCart(String),

    #[error("No product with id '{0}'")]
    UnknownItem(String),

    #[error("{item} is not available in {what} '{value}'")]
    UnavailableOption {
        item: String,
        what: &'static str,
        value: String,
    },

    #[error("Sign in first ('login <email> <name>')")]
    NotSignedIn,
}

/// One user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input
    Empty,
    /// Toggles the key and command overview
    Help,
    Quit,
    Catalog {
        filter: CategoryFilter,
        sort: Option<SortOrder>,
    },
    /// Highlight a product in the catalog table
    Show(String),
    /// Size and color fall back to the item's first options when omitted.
    /// The quantity is never zero.
    Add {
        id: String,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    },
    /// 1-based line number as shown in the cart table
    Set { line: usize, quantity: i64 },
    SetKey { key: CartLineKey, quantity: i64 },
    Remove(usize),
    Clear,
    /// Focus the cart table
    Cart,
    Login { email: String, name: String },
    Logout,
    View(TopLevelView),
    Page(Page),
    Admin,
    Profile,
}

pub const HELP: &str = "\
Keys:
  j/k, Up/Down    move the highlight          Tab     switch catalog/cart (dashboard: next tab)
  Enter or a      add highlighted product     c / s   cycle category / sort order
  + / -           change quantity of line     d, Del  remove cart line
  x               empty the cart              1 / 2   store / admin dashboard
  h / p           home / profile page         :       command line
  ?               this overview               q       quit

Commands (after ':'):
  catalog [all|men|women|kids|shoes|accessories] [featured|price-low|price-high|rating]
  show <id>                          highlight a product
  add <id> [qty [size [color]]]      add to cart (defaults: 1, first size, first color)
  set <line> <qty>                   set quantity of a cart line (0 removes it)
  setkey <id> <size> <color> <qty>   same, addressing the line by product, size and color
  remove <line>                      remove a cart line
  clear                              empty the cart
  cart                               focus the cart
  login <email> <name...>            sign in (any input is accepted)
  logout                             sign out
  view store|admin                   switch top-level view
  page home|profile                  switch page
  admin                              admin dashboard
  profile                            your profile
  help                               this overview
  quit                               exit";

/// Parse one command line
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(Command::Empty);
    };
    let args: Vec<&str> = words.collect();

    match name.to_lowercase().as_str() {
        "help" | "?" => no_args("help", &args, Command::Help),
        "quit" | "exit" | "q" => no_args("quit", &args, Command::Quit),
        "catalog" | "ls" => parse_catalog(&args),
        "show" => {
            let [id] = exact::<1>("show", "a product id", &args)?;
            Ok(Command::Show(id.to_string()))
        }
        "add" => parse_add(&args),
        "set" => {
            let [line, quantity] = exact::<2>("set", "a line number and a quantity", &args)?;
            Ok(Command::Set {
                line: line_number(line)?,
                quantity: number(quantity)?,
            })
        }
        "setkey" => {
            let [id, size, color, quantity] =
                exact::<4>("setkey", "an id, size, color and quantity", &args)?;
            Ok(Command::SetKey {
                key: CartLineKey::new(id, size, color),
                quantity: number(quantity)?,
            })
        }
        "remove" | "rm" => {
            let [line] = exact::<1>("remove", "a line number", &args)?;
            Ok(Command::Remove(line_number(line)?))
        }
        "clear" => no_args("clear", &args, Command::Clear),
        "cart" => no_args("cart", &args, Command::Cart),
        "login" => parse_login(&args),
        "logout" => no_args("logout", &args, Command::Logout),
        "view" => {
            let [view] = exact::<1>("view", "store or admin", &args)?;
            Ok(Command::View(value("view", view)?))
        }
        "page" => {
            let [page] = exact::<1>("page", "home or profile", &args)?;
            Ok(Command::Page(value("page", page)?))
        }
        "admin" => no_args("admin", &args, Command::Admin),
        "profile" => no_args("profile", &args, Command::Profile),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_catalog(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [] => Ok(Command::Catalog {
            filter: CategoryFilter::All,
            sort: None,
        }),
        [filter] => Ok(Command::Catalog {
            filter: value("category", filter)?,
            sort: None,
        }),
        [filter, sort] => Ok(Command::Catalog {
            filter: value("category", filter)?,
            sort: Some(value("sort order", sort)?),
        }),
        _ => Err(CommandError::TooManyArguments("catalog")),
    }
}

fn parse_add(args: &[&str]) -> Result<Command, CommandError> {
    let (id, rest) = args.split_first().ok_or(CommandError::MissingArgument {
        command: "add",
        argument: "a product id",
    })?;
    if rest.len() > 3 {
        return Err(CommandError::TooManyArguments("add"));
    }

    let quantity = match rest.first() {
        Some(quantity) => number(quantity)?,
        None => 1,
    };
    if quantity == 0 {
        return Err(CommandError::ZeroQuantity);
    }

    Ok(Command::Add {
        id: id.to_string(),
        quantity,
        size: rest.get(1).map(|s| s.to_string()),
        color: rest.get(2).map(|c| c.to_string()),
    })
}

fn parse_login(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [] | [_] => Err(CommandError::MissingArgument {
            command: "login",
            argument: "an email and a name",
        }),
        [email, name @ ..] => Ok(Command::Login {
            email: email.to_string(),
            name: name.join(" "),
        }),
    }
}

fn no_args(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::TooManyArguments(command))
    }
}

fn exact<'a, const N: usize>(
    command: &'static str,
    argument: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    if args.len() > N {
        return Err(CommandError::TooManyArguments(command));
    }
    <[&str; N]>::try_from(args).map_err(|_| CommandError::MissingArgument { command, argument })
}

fn number<T: FromStr>(value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

fn line_number(value: &str) -> Result<usize, CommandError> {
    match number::<usize>(value)? {
        0 => Err(CommandError::ZeroLine),
        line => Ok(line),
    }
}

fn value<T: FromStr>(what: &'static str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidValue {
        what,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shopfront_core::domain_models::Category;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn test_catalog_variants() {
        assert_eq!(
            parse("catalog"),
            Ok(Command::Catalog {
                filter: CategoryFilter::All,
                sort: None
            })
        );
        assert_eq!(
            parse("catalog shoes price-high"),
            Ok(Command::Catalog {
                filter: CategoryFilter::Only(Category::Shoes),
                sort: Some(SortOrder::PriceHighToLow)
            })
        );
        assert_eq!(
            parse("catalog hats"),
            Err(CommandError::InvalidValue {
                what: "category",
                value: "hats".to_string()
            })
        );
    }

    #[test]
    fn test_add_defaults() {
        assert_eq!(
            parse("add 4"),
            Ok(Command::Add {
                id: "4".to_string(),
                quantity: 1,
                size: None,
                color: None
            })
        );
        assert_eq!(
            parse("add 4 2 10 White"),
            Ok(Command::Add {
                id: "4".to_string(),
                quantity: 2,
                size: Some("10".to_string()),
                color: Some("White".to_string())
            })
        );
        assert_eq!(
            parse("add"),
            Err(CommandError::MissingArgument {
                command: "add",
                argument: "a product id"
            })
        );
        assert_eq!(
            parse("add 4 two"),
            Err(CommandError::InvalidNumber("two".to_string()))
        );
        assert_eq!(
            parse("add 4 1 10 White extra"),
            Err(CommandError::TooManyArguments("add"))
        );
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        assert_eq!(parse("add 6 0"), Err(CommandError::ZeroQuantity));
        assert_eq!(parse("add 6 0 32 Brown"), Err(CommandError::ZeroQuantity));
        assert_eq!(
            CommandError::ZeroQuantity.to_string(),
            "Quantity must be at least 1"
        );
    }

    #[test]
    fn test_set_and_remove() {
        assert_eq!(parse("set 2 0"), Ok(Command::Set { line: 2, quantity: 0 }));
        assert_eq!(parse("set 1 -1"), Ok(Command::Set { line: 1, quantity: -1 }));
        assert_eq!(parse("remove 0"), Err(CommandError::ZeroLine));
        assert_eq!(parse("rm 3"), Ok(Command::Remove(3)));
        assert_eq!(
            parse("set 1"),
            Err(CommandError::MissingArgument {
                command: "set",
                argument: "a line number and a quantity"
            })
        );
    }

    #[test]
    fn test_setkey() {
        assert_eq!(
            parse("setkey 1 M Black 3"),
            Ok(Command::SetKey {
                key: CartLineKey::new("1", "M", "Black"),
                quantity: 3
            })
        );
    }

    #[test]
    fn test_login_joins_name() {
        assert_eq!(
            parse("login jane@example.com Jane Q Smith"),
            Ok(Command::Login {
                email: "jane@example.com".to_string(),
                name: "Jane Q Smith".to_string()
            })
        );
        assert!(parse("login jane@example.com").is_err());
    }

    #[test]
    fn test_navigation() {
        assert_eq!(parse("view ADMIN"), Ok(Command::View(TopLevelView::Admin)));
        assert_eq!(parse("page profile"), Ok(Command::Page(Page::Profile)));
        assert!(parse("page checkout").is_err());
    }

    #[test]
    fn test_unknown_and_extra_args() {
        assert_eq!(
            parse("checkout"),
            Err(CommandError::UnknownCommand("checkout".to_string()))
        );
        assert_eq!(parse("clear now"), Err(CommandError::TooManyArguments("clear")));
    }
}
