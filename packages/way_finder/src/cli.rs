//! Menu rendering and the interactive navigation loop. All console traffic
//! goes through injected reader/writer handles, so complete sessions can be
//! scripted and their transcripts asserted in tests.

use crate::common::graph_data::{EdgeData, NodeData};
use crate::loading::petgraph::{create_graph, find_town, get_town_name};
use crate::loading::towns::{TownRow, load_roads, load_towns};
use crate::routing::dijkstra::shortest_route;
use petgraph::graph::NodeIndex;
use petgraph::{Directed, Graph};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Failure states for menu input handling
#[derive(Error, Debug, PartialEq)]
pub enum MenuError {
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
}

/// Interpret one line of user input as a menu choice. Accepts an integer
/// between 1 and town_count inclusive, with surrounding whitespace ignored.
/// Returns the position of the selected town on the menu
pub fn parse_choice(input: &str, town_count: usize) -> Result<usize, MenuError> {
    let trimmed = input.trim();

    let choice = match trimmed.parse::<usize>() {
        Ok(choice) => choice,
        Err(_) => return Err(MenuError::InvalidChoice(trimmed.to_string())),
    };

    if choice < 1 || choice > town_count {
        return Err(MenuError::InvalidChoice(trimmed.to_string()));
    }

    Ok(choice)
}

/// Render the numbered town menu, one town per line, in table order
fn render_menu(towns: &[TownRow]) -> String {
    let lines: Vec<String> = towns
        .iter()
        .enumerate()
        .map(|(position, town)| format!("{} :- {}", position + 1, town.name))
        .collect();
    lines.join("\n")
}

/// Prompt for a town until the user enters a valid menu choice. Invalid
/// input is reported and the prompt repeated, rather than ending the
/// session. Returns None once the reader is exhausted
fn read_town<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    graph: &Graph<NodeData, EdgeData, Directed, u32>,
    towns: &[TownRow],
    prompt: &str,
) -> io::Result<Option<NodeIndex>> {
    loop {
        writeln!(output, "{}", prompt)?;
        writeln!(output, "{}", render_menu(towns))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let choice = match parse_choice(&line, towns.len()) {
            Ok(choice) => choice,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        let town_id = towns[choice - 1].id;
        match find_town(graph, town_id) {
            Some(node_inx) => return Ok(Some(node_inx)),
            // The menu is rendered from the same table the graph was built
            // from, so a miss here means the tables disagree
            None => {
                writeln!(output, "Town {} is not on the map", town_id)?;
                continue;
            }
        }
    }
}

/// Run the interactive navigation loop until the user declines to continue,
/// or the input runs out. The road map is rebuilt from the fixed tables on
/// every pass
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        let towns = load_towns();
        let graph = create_graph(towns.clone(), load_roads());

        writeln!(output, "This is Simple Map navigator for you...............")?;

        let start_prompt =
            format!("Enter the start location (1 to {}):", towns.len());
        let start_inx =
            match read_town(input, output, &graph, &towns, &start_prompt)? {
                Some(node_inx) => node_inx,
                None => break,
            };

        let end_prompt =
            format!("Enter the end location (1 to {}):", towns.len());
        let end_inx =
            match read_town(input, output, &graph, &towns, &end_prompt)? {
                Some(node_inx) => node_inx,
                None => break,
            };

        let start_name = get_town_name(&graph, start_inx)
            .expect("Start town isn't in the graph!");
        let end_name = get_town_name(&graph, end_inx)
            .expect("End town isn't in the graph!");

        match shortest_route(&graph, start_inx, end_inx) {
            Ok(route) => {
                writeln!(
                    output,
                    "Shortest path from {} to {}:",
                    start_name, end_name
                )?;
                writeln!(output, "{}", route.describe())?;
                writeln!(output, "Total distance: {}", route.total_distance)?;
            }
            Err(err) => {
                writeln!(output, "{}", err)?;
            }
        }

        writeln!(output, "Do you want to navigate again? (yes/no)")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            break;
        }
        if !answer.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }

    writeln!(output, "Exiting map navigator...")?;
    Ok(())
}
