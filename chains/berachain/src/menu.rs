use crate::orchestrator::{Mode, Orchestrator};
use crate::task::ActivityKind;
use anyhow::Result;
use colored::*;
use core_logic::BatchReport;
use dialoguer::{theme::ColorfulTheme, Select};
use ethers::prelude::*;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    ClaimAll,
    FixedRoute,
    ChooseActivity,
    Randomized,
    Exit,
}

impl MainChoice {
    pub const ALL: [MainChoice; 5] = [
        MainChoice::ClaimAll,
        MainChoice::FixedRoute,
        MainChoice::ChooseActivity,
        MainChoice::Randomized,
        MainChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainChoice::ClaimAll => "Claim Bera for all wallets",
            MainChoice::FixedRoute => "Start base route for all wallets",
            MainChoice::ChooseActivity => "Choose activity for wallets",
            MainChoice::Randomized => "Random activity on the wallets",
            MainChoice::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

pub fn main_menu_items() -> Vec<String> {
    MainChoice::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c.label()))
        .collect()
}

/// The nine activities followed by "10. Back to main menu".
pub fn activity_menu_items() -> Vec<String> {
    let mut items: Vec<String> = ActivityKind::ALL
        .iter()
        .enumerate()
        .map(|(i, k)| format!("{}. {}", i + 1, k.label()))
        .collect();
    items.push(format!("{}. Back to main menu", ActivityKind::ALL.len() + 1));
    items
}

pub fn print_banner() {
    println!("{}", "BeraChain Software".bold().yellow());
    println!("{}", "Artio wallet activity runner".dimmed());
}

fn select(prompt: &str, items: &[String]) -> Result<usize> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact()?)
}

/// Menu loop until "Exit". Each finished batch is optionally written to `export`.
pub async fn run_menu<P: JsonRpcClient + Clone + 'static>(
    orchestrator: &Orchestrator<P>,
    export: Option<&str>,
) -> Result<()> {
    loop {
        print_banner();
        let choice = select("Enter your choice", &main_menu_items())?;

        let Some(choice) = MainChoice::from_index(choice) else {
            continue;
        };

        let mode = match choice {
            MainChoice::ClaimAll => Mode::Claim,
            MainChoice::FixedRoute => Mode::FixedRoute,
            MainChoice::ChooseActivity => match choose_activity()? {
                Some(kind) => Mode::Selective(kind),
                None => continue,
            },
            MainChoice::Randomized => Mode::Randomized,
            MainChoice::Exit => {
                println!("Exiting...");
                return Ok(());
            }
        };

        let report = orchestrator.run(mode).await;
        export_report(&report, export).await;
    }
}

/// `None` means "back to main menu".
fn choose_activity() -> Result<Option<ActivityKind>> {
    let index = select("Enter activity choice for wallets", &activity_menu_items())?;
    Ok(ActivityKind::ALL.get(index).copied())
}

async fn export_report(report: &BatchReport, export: Option<&str>) {
    let Some(path) = export else {
        return;
    };
    match report.export_to_file(path).await {
        Ok(()) => info!("Report exported to {}", path),
        Err(e) => error!("Failed to export report: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_numbering() {
        let items = main_menu_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], "1. Claim Bera for all wallets");
        assert_eq!(items[4], "5. Exit");
    }

    #[test]
    fn test_activity_menu_ends_with_back() {
        let items = activity_menu_items();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0], "1. Bex Swap");
        assert_eq!(items[9], "10. Back to main menu");
    }

    #[test]
    fn test_choice_from_index() {
        assert_eq!(MainChoice::from_index(2), Some(MainChoice::ChooseActivity));
        assert_eq!(MainChoice::from_index(5), None);
    }
}
