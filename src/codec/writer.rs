/// Byte buffer for map file output
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::reader::BinaryReader;

    #[test]
    fn test_write_then_read() {
        let mut writer = BinaryWriter::with_capacity(4);
        writer.write_u8(0x83);
        writer.write_bytes(&[5, 0, 0]);
        assert_eq!(writer.len(), 4);

        let mut reader = BinaryReader::new(writer.as_slice());

        assert_eq!(reader.read_u8().unwrap(), 0x83);
        assert_eq!(reader.read_bytes(3).unwrap(), &[5, 0, 0]);
        assert_eq!(reader.remaining(), 0);
    }
}
