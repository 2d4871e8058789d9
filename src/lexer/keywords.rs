//! The closed, case-insensitive keyword table (§6.2).

use super::token::TokenKind;

/// Looks up `name` (already folded to uppercase) in the keyword table.
///
/// Returns `None` for anything that isn't one of the fixed PGQL keywords,
/// in which case the caller treats it as an unquoted identifier.
pub fn lookup_keyword(name: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match name {
        "ALL" => All,
        "AND" => And,
        "ANY" => Any,
        "ARE" => Are,
        "ARRAY_AGG" => ArrayAgg,
        "AS" => As,
        "ASC" => Asc,
        "AVG" => Avg,
        "BETWEEN" => Between,
        "BOOLEAN" => Boolean,
        "BY" => By,
        "CASE" => Case,
        "CAST" => Cast,
        "CHEAPEST" => Cheapest,
        "COLUMNS" => Columns,
        "COST" => Cost,
        "COUNT" => Count,
        "CREATE" => Create,
        "DATE" => Date,
        "DAY" => Day,
        "DELETE" => Delete,
        "DESC" => Desc,
        "DESTINATION" => Destination,
        "DISTINCT" => Distinct,
        "DOUBLE" => Double,
        "DROP" => Drop,
        "EDGE" => Edge,
        "ELSE" => Else,
        "END" => End,
        "EXCEPT" => Except,
        "EXISTS" => Exists,
        "EXTRACT" => Extract,
        "FALSE" => False,
        "FLOAT" => Float,
        "FOR" => For,
        "FROM" => From,
        "GRAPH" => Graph,
        "GROUP" => Group,
        "HAVING" => Having,
        "HOUR" => Hour,
        "IN" => In,
        "INSERT" => Insert,
        "INT" => Int,
        "INTEGER" => Integer,
        "INTERVAL" => Interval,
        "INTO" => Into,
        "IS" => Is,
        "KEY" => Key,
        "LABEL" => Label,
        "LABELS" => Labels,
        "LIMIT" => Limit,
        "LISTAGG" => Listagg,
        "LONG" => Long,
        "MATCH" => Match,
        "MAX" => Max,
        "MIN" => Min,
        "MINUTE" => Minute,
        "MONTH" => Month,
        "NO" => No,
        "NOT" => Not,
        "NULL" => Null,
        "OFFSET" => Offset,
        "ON" => On,
        "ONE" => One,
        "OR" => Or,
        "ORDER" => Order,
        "PATH" => Path,
        "PER" => Per,
        "PREFIX" => Prefix,
        "PROPERTIES" => Properties,
        "PROPERTY" => Property,
        "REFERENCES" => References,
        "ROW" => Row,
        "SECOND" => Second,
        "SELECT" => Select,
        "SET" => Set,
        "SHORTEST" => Shortest,
        "SOURCE" => Source,
        "STEP" => Step,
        "STRING" => String,
        "SUBSTRING" => Substring,
        "SUM" => Sum,
        "TABLES" => Tables,
        "THEN" => Then,
        "TIME" => Time,
        "TIMESTAMP" => Timestamp,
        "TIMEZONE_HOUR" => TimezoneHour,
        "TIMEZONE_MINUTE" => TimezoneMinute,
        "TOP" => Top,
        "TRUE" => True,
        "UPDATE" => Update,
        "VERTEX" => Vertex,
        "WHEN" => When,
        "WHERE" => Where,
        "WITH" => With,
        "YEAR" => Year,
        "ZONE" => Zone,
        _ => return None,
    })
}
