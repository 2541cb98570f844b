pub mod chebytrig;
