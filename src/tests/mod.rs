
mod redraw_test;
