pub mod clock_page;
