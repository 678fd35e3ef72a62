use e_matrix::{MatrixConfig, MatrixSession};
use log::error;

fn print_column_headers(cols: usize) {
    print!("      ");
    for col in 0..cols {
        print!(" {:>6}", col);
    }
    println!();
}

fn print_row_prefix(row: usize) {
    print!("{:4}: ", row);
}

fn print_matrix(session: &MatrixSession) {
    let grid = session.grid();
    let highlighted = grid
        .cells()
        .next()
        .map(|cell| session.highlighted_cells(cell.id))
        .unwrap_or_default();

    print_column_headers(grid.col_count());
    for (index, (row, sum)) in grid.rows().zip(session.row_sums()).enumerate() {
        print_row_prefix(index);
        for cell in row {
            let marker = if highlighted.contains(&cell.id) { '*' } else { ' ' };
            print!(" {:>5}{}", cell.amount, marker);
        }
        println!("  | sum {}", sum);
    }

    print!("  p{:<2} ", (session.config().percentile * 100.0).round());
    for value in session.column_percentiles() {
        print!(" {:>6.1}", value);
    }
    println!();
}

fn main() {
    env_logger::init();

    println!("E-Matrix Demo");
    println!("=============");

    let config = MatrixConfig::from_env();
    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        std::process::exit(1);
    }

    let mut session = MatrixSession::new(config);
    let dims = session.dimensions();
    println!(
        "Grid: {}x{}, highlighting {} nearest cells (* marks cells nearest to the first cell)",
        dims.rows,
        dims.cols,
        session.nearest_count()
    );
    println!();
    print_matrix(&session);

    let first = session.grid().cells().next().copied();
    if let Some(first) = first {
        for _ in 0..3 {
            session.increment_cell(first.id);
        }
        println!();
        println!("After clicking cell {} three times:", first.id);
        print_matrix(&session);
    }

    session.add_row();
    println!();
    println!("After adding a row:");
    print_matrix(&session);

    println!();
    println!("Row 0 percentages:");
    for entry in session.row_percentages(0) {
        println!(
            "  cell {:>4}: {:>5.1}% of total, {:>5.1}% of max",
            entry.cell_id, entry.percent_of_total, entry.percent_of_max
        );
    }
}
