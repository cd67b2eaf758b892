mod cash_flow_chart;

pub use cash_flow_chart::CashFlowChart;
