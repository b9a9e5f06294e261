/*
    SHA-512 (FIPS 180-4), plus the block sealing variant used by the
    legacy digest profile.

    The length field is the full 128-bit big-endian bit count of the
    message.
*/

pub const BLOCK_LEN: usize = 128;
pub const DIGEST_LEN: usize = 64;

const H0: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Incremental SHA-512 state.
#[derive(Clone)]
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    length: u128
}

impl Sha512 {
    pub fn new() -> Self {
        Self {
            state: H0,
            buffer: [0; BLOCK_LEN],
            buffered: 0,
            length: 0
        }
    }

    /// Absorbs more input.
    pub fn update(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u128);

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < BLOCK_LEN {
                return;
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(&mut self.state, block);
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Pads the buffered tail and returns the digest.
    pub fn finalize(self) -> [u8; DIGEST_LEN] {
        let bit_len = self.length.wrapping_mul(8);
        finish(self.state, &self.buffer[..self.buffered], bit_len)
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

/*
    Pads `tail` (at most one block) and runs the last compressions.
    A full block tail is compressed as is and followed by a block of
    pure padding.
*/
fn finish(mut state: [u64; 8], mut tail: &[u8], bit_len: u128) -> [u8; DIGEST_LEN] {
    debug_assert!(tail.len() <= BLOCK_LEN);
    if tail.len() == BLOCK_LEN {
        compress(&mut state, tail);
        tail = &[];
    }

    let mut block = [0u8; BLOCK_LEN];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;

    if tail.len() >= BLOCK_LEN - 16 {
        compress(&mut state, &block);
        block = [0u8; BLOCK_LEN];
    }
    block[BLOCK_LEN - 16..].copy_from_slice(&bit_len.to_be_bytes());
    compress(&mut state, &block);

    let mut digest = [0u8; DIGEST_LEN];
    for (chunk, word) in digest.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

fn compress(state: &mut [u64; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut w = [0u64; 80];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut be = [0u8; 8];
        be.copy_from_slice(bytes);
        *word = u64::from_be_bytes(be);
    }
    for t in 16..80 {
        let s0 = w[t - 15].rotate_right(1) ^ w[t - 15].rotate_right(8) ^ (w[t - 15] >> 7);
        let s1 = w[t - 2].rotate_right(19) ^ w[t - 2].rotate_right(61) ^ (w[t - 2] >> 6);
        w[t] = w[t - 16]
            .wrapping_add(s0)
            .wrapping_add(w[t - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for t in 0..80 {
        let s1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
        let ch = (e & f) ^ (!e & g);
        let t1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let s0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *word = word.wrapping_add(*v);
    }
}

/// One-shot SHA-512.
pub fn sha512<T>(input: T) -> [u8; DIGEST_LEN]
where T: AsRef<[u8]>
{
    let mut hasher = Sha512::new();
    hasher.update(input.as_ref());
    hasher.finalize()
}

/**
    SHA-512 as computed by the legacy seed tool.

    Every full block that is followed by more input is compressed and
    then "sealed" with an extra block holding 112 zero bytes and the
    total bit length. The remaining tail (1 to 128 bytes) is padded
    normally. Inputs of at most one block hash exactly like `sha512`.
*/
pub fn sha512_block_sealed(data: &[u8]) -> [u8; DIGEST_LEN] {
    let bit_len = (data.len() as u128).wrapping_mul(8);

    let mut seal = [0u8; BLOCK_LEN];
    seal[BLOCK_LEN - 16..].copy_from_slice(&bit_len.to_be_bytes());

    let tail_start = match data.len() {
        0 => 0,
        n => (n - 1) / BLOCK_LEN * BLOCK_LEN
    };

    let mut state = H0;
    for block in data[..tail_start].chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
        compress(&mut state, &seal);
    }
    finish(state, &data[tail_start..], bit_len)
}
