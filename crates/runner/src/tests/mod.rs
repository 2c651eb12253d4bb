mod block_producer;
mod deposition;
mod sync;
mod type_dep;
