pub mod prime_pool;
