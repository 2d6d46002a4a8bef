pub mod device_mapper;
