mod postgres;

pub use postgres::PgProbe;
