/// Raw cell texts of one standings row (e.g. `Pos Team P W D L GF GA GD Pts`).
///
/// Column meaning varies between leagues and is left to the consumer.
pub type TableRow = Vec<String>;

/// All rows of a standings table, in document order.
pub type LeagueTable = Vec<TableRow>;
