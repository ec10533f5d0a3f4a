pub mod explanation_compositor;
