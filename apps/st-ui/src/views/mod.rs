pub mod plot_view;

pub use plot_view::PlotView;
