//! Basic example of using the wordgrid engine.

use wordgrid_core::{LetterGrid, Solver, SolverConfig, Trie};

fn main() {
    // Build a tiny dictionary.
    let trie: Trie = ["ab", "cd", "ac", "bd"].into_iter().collect();
    println!("Dictionary has {} words\n", trie.len());

    // Fill a 2x2 grid:
    //   a b
    //   c d
    let grid = LetterGrid::from_rows(&["ab", "cd"]).expect("rows are rectangular");
    println!(
        "Grid is {}x{}, filled: {}\n",
        grid.width(),
        grid.height(),
        grid.is_filled()
    );

    // Solve without hints.
    let solver = Solver::new();
    let report = solver.solve(&grid, &trie, &[]).expect("hints are in bounds");
    println!("Found {} solutions:", report.solutions.len());
    for (i, solution) in report.solutions.iter().enumerate() {
        println!("  Solution {}:", i + 1);
        for word in &solution.words {
            let coords: Vec<String> = word
                .path
                .iter()
                .map(|&index| {
                    let (x, y) = grid.coords_of(index);
                    format!("({}, {})", x, y)
                })
                .collect();
            println!("    {} at {}", word.word, coords.join(" -> "));
        }
    }

    // Require a word to start at cell 1 (top-right).
    let report = solver.solve(&grid, &trie, &[1]).expect("hints are in bounds");
    println!("\nWith a start hint at cell 1: {} solution(s)", report.solutions.len());

    // Cap the search for large grids.
    let capped = Solver::with_config(SolverConfig {
        max_solutions: Some(1),
        ..Default::default()
    });
    let report = capped.solve(&grid, &trie, &[]).expect("hints are in bounds");
    println!(
        "Capped at one solution: got {}, truncated: {}",
        report.solutions.len(),
        report.truncated
    );
}
