pub mod a003_opportunity_line_item;
