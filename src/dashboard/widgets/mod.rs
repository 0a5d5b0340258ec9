pub mod annual_growth;
pub mod expense_donut;
pub mod metric_cards;
pub mod monthly_bars;
pub mod revenue_chart;
pub mod timeframe_tabs;
pub mod transaction_table;
