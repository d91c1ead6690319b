use floodit_solver::engine::{traverse, Grid, TileColor};
use floodit_solver::solver::solve_game;
use std::io::{self, Write};

fn main() {
    let mut grid = Grid::new_random(6, 6, 4);
    let greedy_moves = solve_game(&grid).len(); // Benchmark to beat
    let mut moves = 0u32;

    println!("Welcome to Flood-It!");
    println!(
        "Flood the whole grid from the top-left corner. The greedy solver needs {} moves.",
        greedy_moves
    );

    loop {
        println!("---------------------");
        println!("Moves: {}", moves);
        println!("{}", grid);

        if grid.is_solved() {
            println!();
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Total Moves: {} (greedy solver: {})", moves, greedy_moves);
            println!("---------------------");
            break;
        }

        print!("Enter a color (1-8), or 'q' to quit: ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        match trimmed_input
            .parse::<u8>()
            .ok()
            .and_then(TileColor::from_number)
        {
            Some(color) => {
                if color == grid.region_color() {
                    println!(
                        "The region is already color {}; pick a different one.",
                        color.to_number()
                    );
                    continue;
                }
                grid = traverse(&grid, color);
                moves += 1;
            }
            None => println!("Invalid input: enter a digit between 1 and 8, or 'q'."),
        }
    }
}
