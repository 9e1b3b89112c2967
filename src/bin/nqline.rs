use nqline::Board;

fn main() {
    if std::env::var("NQLINE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("NQLINE_LOG")
            .write_style("NQLINE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    // Solve each size in the demonstration range and show the result.
    // Board sizes stay small; the search is exponential and the
    // recursion depth equals the side length.
    for n in 0..10 {
        let mut board = Board::new(n);
        let solved = board.solve();

        println!(
            "\n{n}x{n} Board - {}",
            if solved { "Success" } else { "Failure" }
        );
        print!("{}", board.render());
    }
}
