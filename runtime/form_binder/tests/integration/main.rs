mod errors;
mod route_params;
mod scalars;
mod sequences;
