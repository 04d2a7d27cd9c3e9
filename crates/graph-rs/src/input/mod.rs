pub mod edgelist;
