pub mod stepped_axis;
