//! Interactive shell: one session, one navigation history, every flow

use anyhow::{Result, bail};
use parkspot_frontend_common::flows::Submission;
use parkspot_frontend_common::navigation::{FEATURE_CARDS, GuardDecision, guard, open_card};
use parkspot_frontend_common::{
    AccessLevel, CitySearch, History, LoginFlow, NavigationBar, Navigator, ParkingApi, Route,
    SessionStore,
};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::render;

const HELP: &str = "\
Commands:
  search <city>           find parking lots in a city
  open <n|lot id>         pick a lot from the results
  features                list the landing page cards
  feature <n>             follow a landing page card
  login <email> <pass>    sign in
  logout                  sign out
  whoami                  show the signed-in account
  links                   show the navigation bar
  menu                    toggle the navigation menu
  go <path>               open a page, e.g. go /ticket-history
  back                    previous page
  refresh                 ask the server who is signed in
  help                    this text
  quit                    leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Open(String),
    Features,
    Feature(usize),
    Login { email: String, password: String },
    Logout,
    WhoAmI,
    Links,
    Menu,
    Go(String),
    Back,
    Refresh,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            // A blank city goes through to the form so it can reject it
            "search" => Self::Search(rest.to_string()),
            "open" if !rest.is_empty() => Self::Open(rest.to_string()),
            "open" => bail!("usage: open <n|lot id>"),
            "features" | "home" => Self::Features,
            "feature" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Self::Feature(n),
                _ => bail!("usage: feature <n>"),
            },
            "login" => {
                let (email, password) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(email, password)| (email, password.trim()));
                Self::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                }
            }
            "logout" => Self::Logout,
            "whoami" => Self::WhoAmI,
            "links" | "nav" => Self::Links,
            "menu" => Self::Menu,
            "go" if !rest.is_empty() => Self::Go(rest.to_string()),
            "go" => bail!("usage: go <path>"),
            "back" => Self::Back,
            "refresh" => Self::Refresh,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command '{other}', try 'help'"),
        };
        Ok(Some(command))
    }
}

pub struct Shell<A> {
    api: A,
    session: SessionStore,
    bar: NavigationBar,
    search: CitySearch,
    login: LoginFlow,
    history: History,
}

impl<A: ParkingApi> Shell<A> {
    pub fn new(api: A, redirect_delay: Duration) -> Self {
        let session = SessionStore::new();

        // Re-render the bar whenever the session changes
        session.subscribe(|session| {
            println!(
                "{}",
                render::nav_line(&AccessLevel::from_session(session), false)
            );
        });

        Self {
            api,
            bar: NavigationBar::new(session.clone()),
            search: CitySearch::new(),
            login: LoginFlow::new(session.clone()).with_redirect_delay(redirect_delay),
            history: History::new(),
            session,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        info!("Starting interactive shell");
        println!("{}", render::nav_bar(&self.bar));
        self.session.restore(&self.api).await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("parkspot{}> ", self.history.current());
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            match ShellCommand::parse(&line) {
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => self.handle(command).await?,
                Ok(None) => {}
                Err(err) => println!("{err}"),
            }
        }
        Ok(())
    }

    async fn handle(&mut self, command: ShellCommand) -> Result<()> {
        let before = self.history.current().clone();

        match command {
            ShellCommand::Search(city) => {
                self.enter(Route::LotsByCity);
                if let Err(validation) = self.search.submit(&self.api, &city).await {
                    debug!(%validation, "search rejected");
                }
                println!("{}", render::search_view(&self.search));
            }
            ShellCommand::Open(selector) => self.open(&selector),
            ShellCommand::Features => println!("{}", render::home_view(&FEATURE_CARDS)),
            ShellCommand::Feature(n) => match FEATURE_CARDS.get(n - 1) {
                Some(card) => {
                    if let GuardDecision::Redirect(to) =
                        open_card(card, &self.bar.access(), &mut self.history)
                    {
                        println!("{} is not available, redirecting to {to}", card.target);
                    }
                }
                None => println!("No feature {n}, try 'features'"),
            },
            ShellCommand::Login { email, password } => self.sign_in(&email, &password).await,
            ShellCommand::Logout => {
                if self.session.identity().is_none() {
                    println!("Not signed in");
                } else {
                    self.bar.logout(&self.api, &mut self.history).await;
                }
            }
            ShellCommand::WhoAmI => match self.session.identity() {
                Some(identity) => println!("{}", serde_json::to_string_pretty(&identity)?),
                None => println!("{}", render::identity_line(None)),
            },
            ShellCommand::Links => println!("{}", render::nav_bar(&self.bar)),
            ShellCommand::Menu => {
                self.bar.toggle_menu();
                println!("{}", render::nav_bar(&self.bar));
            }
            ShellCommand::Go(path) => match path.parse::<Route>() {
                Ok(route) => self.enter(route),
                Err(err) => println!("{err}"),
            },
            ShellCommand::Back => {
                if self.history.back().is_none() {
                    println!("Already at the first page");
                }
            }
            ShellCommand::Refresh => {
                let identity = self.session.restore(&self.api).await;
                println!("{}", render::identity_line(identity.as_ref()));
            }
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => {}
        }

        self.left(&before);
        if self.history.current() != &before {
            println!("{}", render::location(self.history.current()));
        }
        Ok(())
    }

    /// Navigate through the route guard
    fn enter(&mut self, route: Route) {
        if self.history.current() == &route {
            return;
        }
        match guard(&route, &self.bar.access()) {
            GuardDecision::Allow => self.history.navigate(route),
            GuardDecision::Redirect(to) => {
                println!("{route} is not available, redirecting to {to}");
                self.history.navigate(to);
            }
        }
    }

    /// Pages that were left drop whatever they still had pending
    fn left(&mut self, previous: &Route) {
        if self.history.current() == previous {
            return;
        }
        match previous {
            Route::LotsByCity => self.search.abandon(),
            Route::Login => self.login.abandon(),
            _ => {}
        }
    }

    fn open(&mut self, selector: &str) {
        let lots = self.search.lots();
        let picked = selector
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| lots.get(index))
            .or_else(|| lots.iter().find(|lot| lot.id.as_str() == selector));

        match picked {
            Some(lot) => {
                let lot = lot.clone();
                self.search.select(&lot, &mut self.history);
            }
            None => println!("No lot '{selector}' in the current results"),
        }
    }

    async fn sign_in(&mut self, email: &str, password: &str) {
        self.enter(Route::Login);

        let ticket = match self.login.begin(email, password) {
            Ok(Submission::Started(ticket)) => ticket,
            Ok(Submission::Suppressed) => return,
            Err(validation) => {
                println!("{validation}");
                return;
            }
        };

        let outcome = self.api.login(ticket.email(), ticket.password()).await;
        let redirect = self.login.complete(ticket, outcome);
        println!("{}", render::login_view(&self.login));

        if let Some(redirect) = redirect {
            tokio::time::sleep(redirect.after).await;
            self.login.follow_redirect(redirect, &mut self.history);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        assert_eq!(
            ShellCommand::parse("search  New York ").unwrap(),
            Some(ShellCommand::Search("New York".into()))
        );
        assert_eq!(
            ShellCommand::parse("search").unwrap(),
            Some(ShellCommand::Search(String::new()))
        );
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(
            ShellCommand::parse("login a@b.com secret").unwrap(),
            Some(ShellCommand::Login {
                email: "a@b.com".into(),
                password: "secret".into()
            })
        );
        assert_eq!(
            ShellCommand::parse("LOGIN a@b.com").unwrap(),
            Some(ShellCommand::Login {
                email: "a@b.com".into(),
                password: String::new()
            })
        );
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            ShellCommand::parse("go /ticket-history").unwrap(),
            Some(ShellCommand::Go("/ticket-history".into()))
        );
        assert_eq!(
            ShellCommand::parse("open 2").unwrap(),
            Some(ShellCommand::Open("2".into()))
        );
        assert_eq!(ShellCommand::parse("exit").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(
            ShellCommand::parse("feature 3").unwrap(),
            Some(ShellCommand::Feature(3))
        );
        assert_eq!(ShellCommand::parse("home").unwrap(), Some(ShellCommand::Features));
        assert!(ShellCommand::parse("feature 0").is_err());
        assert!(ShellCommand::parse("go").is_err());
        assert!(ShellCommand::parse("open").is_err());
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
        let err = ShellCommand::parse("book 3").unwrap_err();
        assert!(err.to_string().contains("unknown command 'book'"));
    }
}
